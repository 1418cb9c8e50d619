/// Trading: buy and sell a single asset at a host-supplied quote.

pub mod logic;
pub mod state;

pub use state::{TradingDesk, INITIAL_QUOTE};
