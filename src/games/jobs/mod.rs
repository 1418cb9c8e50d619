/// Freelance: one fixed-duration job at a time, gated by career level.

pub mod logic;
pub mod state;

use super::{Fired, TimerDriven};

pub use state::{JobBoard, JobDef, JobSlot, JOBS};

/// The progress timer runs until the job completes, then disarms itself.
impl TimerDriven for JobBoard {
    fn fire(&mut self) -> Fired {
        match logic::advance(self) {
            Some(reward) => Fired::done(reward),
            None if self.is_busy() => Fired::again(Default::default()),
            None => Fired::done(Default::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_disarms_on_completion() {
        let mut board = JobBoard::new();
        logic::start(&mut board, 1, "ad_click").unwrap();
        let mut fired = board.fire();
        let mut firings = 1;
        while fired.rearm {
            fired = board.fire();
            firings += 1;
        }
        assert_eq!(firings, 30);
        assert_eq!(fired.effect.currency, 50);
    }

    #[test]
    fn stray_firing_when_idle_disarms() {
        let mut board = JobBoard::new();
        let fired = board.fire();
        assert!(!fired.rearm);
        assert!(fired.effect.is_empty());
    }
}
