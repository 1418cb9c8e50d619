//! Daily bonus gate: one grant, then a 24 hour cooldown.

use crate::economy::Effect;
use crate::error::{Outcome, Rejection};

pub const DAILY_BONUS_CURRENCY: i64 = 5_000;
pub const DAILY_BONUS_XP: u64 = 100;
/// 24h in milliseconds.
pub const COOLDOWN_MS: u64 = 24 * 60 * 60 * 1_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DailyBonus {
    /// Unix milliseconds of the last successful claim; `None` = never claimed.
    last_claim_ms: Option<u64>,
}

impl DailyBonus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_claim_ms(&self) -> Option<u64> {
        self.last_claim_ms
    }

    /// The gate opens strictly after the cooldown has elapsed.
    pub fn is_available(&self, now_ms: u64) -> bool {
        match self.last_claim_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > COOLDOWN_MS,
        }
    }

    /// Milliseconds until the gate opens again (0 when available).
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.last_claim_ms {
            Some(_) if self.is_available(now_ms) => 0,
            None => 0,
            Some(last) => (COOLDOWN_MS + 1).saturating_sub(now_ms.saturating_sub(last)),
        }
    }

    pub fn claim(&mut self, now_ms: u64) -> Outcome {
        if !self.is_available(now_ms) {
            return Err(Rejection::CooldownActive);
        }
        self.last_claim_ms = Some(now_ms);
        Ok(Effect::currency(DAILY_BONUS_CURRENCY).with_xp(DAILY_BONUS_XP))
    }
}
