/// Crypto Lottery: buy a key, reveal 3 of 9 sectors, get paid by prizes found.

pub mod logic;
pub mod state;

use super::{Fired, TimerDriven};

pub use state::{LotteryState, PayoutTier, RoundPhase, TICKET_COST};

/// Delay before the rest of a finished board is shown (ticks).
pub const REVEAL_DELAY_TICKS: u32 = 5;

/// One-shot: reveals the whole board after a round finishes.
impl TimerDriven for LotteryState {
    fn fire(&mut self) -> Fired {
        logic::reveal_all(self);
        Fired::done(Default::default())
    }
}
