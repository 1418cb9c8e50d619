//! Crypto Tycoon: progression & economy engine.
//!
//! The engine owns every rule that moves currency or experience: the reward
//! ladder, the daily bonus, the mini-games (mining, jobs, lottery, trading)
//! and the home furnishing grid. A presentation layer drives it through
//! [`Session`] and renders [`Session::snapshot`].

pub mod bindings;
pub mod config;
pub mod economy;
pub mod error;
pub mod games;
pub mod platform;
pub mod progression;
pub mod scheduler;
pub mod session;
pub mod snapshot;
pub mod time;

pub use config::SessionConfig;
pub use economy::{Effect, Player, Theme};
pub use error::{Outcome, Rejection};
pub use session::Session;
