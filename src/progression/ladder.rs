//! The 30-level reward ladder.
//!
//! Generated once per session; afterwards only `claimed` ever changes, and
//! only from false to true.

use serde::Serialize;

use crate::economy::{Effect, Theme};
use crate::error::{Outcome, Rejection};

/// Number of rungs on the ladder.
pub const LADDER_LEN: u32 = 30;

/// Level that unlocks the Matrix theme.
pub const MATRIX_LEVEL: u32 = 10;
/// Final level, unlocks the Gold theme.
pub const GOLD_LEVEL: u32 = 30;

/// What a rung pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Reward {
    Currency(u64),
    Theme(Theme),
}

impl Reward {
    pub fn effect(&self) -> Effect {
        match self {
            Reward::Currency(amount) => Effect::credit(*amount),
            Reward::Theme(theme) => Effect::unlock(*theme),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Reward::Currency(amount) => format!("{} CR", amount),
            Reward::Theme(theme) => format!("Theme: {}", theme.name()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LadderEntry {
    pub level: u32,
    pub xp_threshold: u64,
    pub reward: Reward,
    pub claimed: bool,
}

impl LadderEntry {
    pub fn is_reached(&self, xp: u64) -> bool {
        xp >= self.xp_threshold
    }

    pub fn is_claimable(&self, xp: u64) -> bool {
        !self.claimed && self.is_reached(xp)
    }
}

/// `floor(500 × level^1.4)`.
pub fn xp_threshold(level: u32) -> u64 {
    (500.0 * (level as f64).powf(1.4)).floor() as u64
}

fn reward_for(level: u32) -> Reward {
    match level {
        MATRIX_LEVEL => Reward::Theme(Theme::Matrix),
        GOLD_LEVEL => Reward::Theme(Theme::Gold),
        l if l % 5 == 0 => Reward::Currency(l as u64 * 5_000),
        l => Reward::Currency(l as u64 * 2_000),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ladder {
    entries: Vec<LadderEntry>,
}

impl Ladder {
    pub fn generate() -> Self {
        let entries = (1..=LADDER_LEN)
            .map(|level| LadderEntry {
                level,
                xp_threshold: xp_threshold(level),
                reward: reward_for(level),
                claimed: false,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[LadderEntry] {
        &self.entries
    }

    pub fn entry(&self, level: u32) -> Option<&LadderEntry> {
        self.entries.iter().find(|e| e.level == level)
    }

    /// Displayed level: how many thresholds the player has crossed.
    pub fn current_level(&self, xp: u64) -> u32 {
        self.entries.iter().filter(|e| e.is_reached(xp)).count() as u32
    }

    /// First rung not yet reached, or `None` at the top.
    pub fn next_reward(&self, xp: u64) -> Option<&LadderEntry> {
        self.entries.iter().find(|e| !e.is_reached(xp))
    }

    /// Percent progress from the last reached threshold to the next one.
    pub fn progress_to_next(&self, xp: u64) -> f64 {
        let next = match self.next_reward(xp) {
            Some(e) => e.xp_threshold,
            None => return 100.0,
        };
        let level = self.current_level(xp) as usize;
        let prev = if level == 0 {
            0
        } else {
            self.entries[level - 1].xp_threshold
        };
        (xp - prev) as f64 / (next - prev) as f64 * 100.0
    }

    pub fn claimable_count(&self, xp: u64) -> usize {
        self.entries.iter().filter(|e| e.is_claimable(xp)).count()
    }

    /// Claim the reward for `level`. The returned effect carries the payout;
    /// the entry is marked claimed before returning.
    pub fn claim(&mut self, level: u32, xp: u64) -> Outcome {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.level == level)
            .ok_or(Rejection::UnknownId)?;
        if entry.claimed {
            return Err(Rejection::AlreadyClaimed);
        }
        if !entry.is_reached(xp) {
            return Err(Rejection::BelowThreshold);
        }
        entry.claimed = true;
        Ok(entry.reward.effect())
    }
}

impl Default for Ladder {
    fn default() -> Self {
        Self::generate()
    }
}
