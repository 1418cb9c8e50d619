/// Mini-games and the home designer, plus the trait shared by timer-driven ones.

pub mod home;
pub mod jobs;
pub mod lottery;
pub mod mining;
pub mod trading;

use crate::economy::Effect;

/// Result of one timer firing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fired {
    /// Effect to apply to the ledger.
    pub effect: Effect,
    /// Whether the timer should stay armed.
    pub rearm: bool,
}

impl Fired {
    pub fn again(effect: Effect) -> Self {
        Self {
            effect,
            rearm: true,
        }
    }

    pub fn done(effect: Effect) -> Self {
        Self {
            effect,
            rearm: false,
        }
    }
}

/// Trait implemented by components that own a session timer.
pub trait TimerDriven {
    /// Handle one firing of the owning timer.
    fn fire(&mut self) -> Fired;
}
