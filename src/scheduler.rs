//! Explicit session timers, counted in 100ms ticks.
//!
//! The scheduler only counts. It says which timers are due on each tick and
//! the session decides what a firing does and whether the timer stays armed.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerKind {
    /// Passive mining income, once a second.
    MiningIncome,
    /// Freelance job progress, every tick.
    JobProgress,
    /// Reveals the whole lottery board after a round finishes.
    LotteryReveal,
}

impl TimerKind {
    /// Ticks between firings.
    pub fn period(&self) -> u32 {
        match self {
            TimerKind::MiningIncome => 10,
            TimerKind::JobProgress => 1,
            TimerKind::LotteryReveal => 5,
        }
    }

    pub fn is_one_shot(&self) -> bool {
        matches!(self, TimerKind::LotteryReveal)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Timer {
    kind: TimerKind,
    /// Ticks left until the next firing.
    remaining: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scheduler {
    /// Armed timers in arming order; at most one per kind.
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind`. Arming an armed timer keeps its current countdown.
    pub fn start(&mut self, kind: TimerKind) {
        if self.is_armed(kind) {
            return;
        }
        log::debug!("timer {:?} armed", kind);
        self.timers.push(Timer {
            kind,
            remaining: kind.period(),
        });
    }

    /// Disarm `kind`. Returns whether it was armed.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.kind != kind);
        let removed = self.timers.len() != before;
        if removed {
            log::debug!("timer {:?} cancelled", kind);
        }
        removed
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    pub fn armed(&self) -> Vec<TimerKind> {
        self.timers.iter().map(|t| t.kind).collect()
    }

    /// Advance one tick and return the timers due, in arming order.
    ///
    /// Periodic timers reload their countdown; one-shots are dropped.
    pub fn step(&mut self) -> Vec<TimerKind> {
        let mut due = Vec::new();
        for timer in self.timers.iter_mut() {
            timer.remaining = timer.remaining.saturating_sub(1);
            if timer.remaining == 0 {
                due.push(timer.kind);
                timer.remaining = timer.kind.period();
            }
        }
        self.timers
            .retain(|t| !(t.kind.is_one_shot() && due.contains(&t.kind)));
        due
    }
}
