//! Freelance job catalog and the single job slot.

use serde::Serialize;

/// Job progress ticks per second of job duration (100ms ticks).
pub const TICKS_PER_SECOND: u32 = 10;

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobDef {
    pub id: &'static str,
    pub title: &'static str,
    pub duration_secs: u32,
    pub reward: u64,
    pub xp_reward: u64,
    pub level_required: u32,
}

impl JobDef {
    /// Ticks from start to completion.
    pub fn total_ticks(&self) -> u32 {
        self.duration_secs * TICKS_PER_SECOND
    }
}

pub static JOBS: [JobDef; 7] = [
    JobDef {
        id: "ad_click",
        title: "Ad clicking",
        duration_secs: 3,
        reward: 50,
        xp_reward: 5,
        level_required: 1,
    },
    JobDef {
        id: "captcha",
        title: "Captcha entry",
        duration_secs: 5,
        reward: 100,
        xp_reward: 10,
        level_required: 1,
    },
    JobDef {
        id: "copywriting",
        title: "Product review",
        duration_secs: 10,
        reward: 300,
        xp_reward: 25,
        level_required: 2,
    },
    JobDef {
        id: "design_logo",
        title: "Logo design",
        duration_secs: 20,
        reward: 1_500,
        xp_reward: 100,
        level_required: 5,
    },
    JobDef {
        id: "bug_fix",
        title: "Bug fix",
        duration_secs: 45,
        reward: 3_000,
        xp_reward: 250,
        level_required: 8,
    },
    JobDef {
        id: "frontend",
        title: "Landing page",
        duration_secs: 90,
        reward: 8_000,
        xp_reward: 500,
        level_required: 12,
    },
    JobDef {
        id: "smart_contract",
        title: "Smart contract",
        duration_secs: 180,
        reward: 20_000,
        xp_reward: 1_500,
        level_required: 20,
    },
];

pub fn find_job(id: &str) -> Option<&'static JobDef> {
    JOBS.iter().find(|j| j.id == id)
}

/// The one job slot.
#[derive(Clone, Debug, PartialEq)]
pub enum JobSlot {
    Idle,
    Running {
        job: &'static JobDef,
        elapsed_ticks: u32,
    },
}

impl JobSlot {
    /// Progress in percent; exactly 100.0 once `elapsed == total`.
    pub fn progress(&self) -> f64 {
        match self {
            JobSlot::Idle => 0.0,
            JobSlot::Running { job, elapsed_ticks } => {
                *elapsed_ticks as f64 * 100.0 / job.total_ticks() as f64
            }
        }
    }

    pub fn active_job(&self) -> Option<&'static JobDef> {
        match self {
            JobSlot::Idle => None,
            JobSlot::Running { job, .. } => Some(job),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JobBoard {
    pub slot: JobSlot,
    /// Id of the most recently finished job, for the result banner.
    pub last_completed: Option<&'static str>,
    pub completed_runs: u32,
}

impl JobBoard {
    pub fn new() -> Self {
        Self {
            slot: JobSlot::Idle,
            last_completed: None,
            completed_runs: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.slot, JobSlot::Running { .. })
    }
}

impl Default for JobBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_ticks_is_duration_times_ten() {
        assert_eq!(find_job("ad_click").unwrap().total_ticks(), 30);
        assert_eq!(find_job("smart_contract").unwrap().total_ticks(), 1_800);
    }

    #[test]
    fn progress_reaches_exactly_100() {
        for job in JOBS.iter() {
            let slot = JobSlot::Running {
                job,
                elapsed_ticks: job.total_ticks(),
            };
            assert_eq!(slot.progress(), 100.0);
        }
    }

    #[test]
    fn idle_board() {
        let board = JobBoard::new();
        assert!(!board.is_busy());
        assert_eq!(board.slot.progress(), 0.0);
        assert!(board.slot.active_job().is_none());
    }

    #[test]
    fn catalog_levels_non_decreasing() {
        for pair in JOBS.windows(2) {
            assert!(pair[1].level_required >= pair[0].level_required);
        }
    }
}
