//! Wall clock to session ticks.
//!
//! The host calls [`SessionClock::advance`] with a millisecond timestamp at
//! whatever rate it renders. Elapsed time is banked and paid out as whole
//! 100ms ticks so timers stay deterministic.

/// Session ticks per real second.
pub const TICKS_PER_SEC: u32 = 10;
/// Milliseconds per tick.
pub const TICK_MS: u64 = 1_000 / TICKS_PER_SEC as u64;
/// Longest gap credited between two readings (a backgrounded tab resumes
/// with at most this much catch-up).
pub const MAX_FRAME_GAP_MS: u64 = 500;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionClock {
    /// Previous reading; `None` until the first call.
    last_ms: Option<u64>,
    /// Credited milliseconds not yet turned into ticks.
    banked_ms: u64,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a reading and get the number of whole ticks it covers.
    ///
    /// The first reading only sets the baseline. A reading earlier than the
    /// previous one credits nothing.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        let gap = match self.last_ms {
            Some(prev) => now_ms.saturating_sub(prev).min(MAX_FRAME_GAP_MS),
            None => 0,
        };
        self.last_ms = Some(now_ms);
        self.banked_ms += gap;
        let ticks = self.banked_ms / TICK_MS;
        self.banked_ms %= TICK_MS;
        ticks as u32
    }

    pub fn last_reading(&self) -> Option<u64> {
        self.last_ms
    }
}
