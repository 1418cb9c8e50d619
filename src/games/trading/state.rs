/// Trading desk: one asset, a quote pushed in by the host, and a share count.

use serde::Serialize;

/// Quote a fresh desk opens with.
pub const INITIAL_QUOTE: u64 = 100;
/// XP cap for a single sale.
pub const MAX_SELL_XP: u64 = 50;
/// Shares per XP point when selling (rounded up).
pub const SHARES_PER_XP: u64 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TradingDesk {
    /// Current price per share, always ≥ 1.
    pub quote: u64,
    pub shares: u64,
    pub trades: u32,
}

impl TradingDesk {
    pub fn new() -> Self {
        Self {
            quote: INITIAL_QUOTE,
            shares: 0,
            trades: 0,
        }
    }

    /// Value of the position at the current quote, saturating.
    pub fn holdings_value(&self) -> u64 {
        self.shares.saturating_mul(self.quote)
    }

    /// XP for selling `amount` shares: one per 5 (rounded up), at most 50.
    pub fn sell_xp(amount: u64) -> u64 {
        amount.div_ceil(SHARES_PER_XP).min(MAX_SELL_XP)
    }
}

impl Default for TradingDesk {
    fn default() -> Self {
        Self::new()
    }
}
