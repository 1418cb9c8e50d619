/// Crypto Mining: an idle clicker with levelled click and auto upgrades.

pub mod logic;
pub mod state;

use super::{Fired, TimerDriven};

pub use state::{MiningState, UpgradeKind, MAX_LEVEL};

/// Passive income keeps paying for as long as the mining timer is armed.
impl TimerDriven for MiningState {
    fn fire(&mut self) -> Fired {
        Fired::again(logic::payout(self))
    }
}
