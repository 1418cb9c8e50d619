/// Experience-driven progression: the reward ladder and the daily bonus.

pub mod daily;
pub mod ladder;

pub use daily::DailyBonus;
pub use ladder::{Ladder, LadderEntry, Reward};
