//! Rejection reasons shared by every engine operation.
//!
//! A rejected call never mutates state; the caller surfaces the reason and
//! re-presents the same choice.

use serde::Serialize;
use thiserror::Error;

use crate::economy::Effect;

/// Why an engine call was turned down.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    #[error("not enough credits")]
    InsufficientFunds,
    #[error("item is already owned")]
    AlreadyOwned,
    #[error("item is not owned")]
    NotOwned,
    #[error("reward was already claimed")]
    AlreadyClaimed,
    #[error("not enough experience for this reward")]
    BelowThreshold,
    #[error("position is outside the grid")]
    OutOfBounds,
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("another task is already running")]
    SlotBusy,
    #[error("player level is too low")]
    LevelTooLow,
    #[error("bonus is still cooling down")]
    CooldownActive,
    #[error("upgrade is at max level")]
    MaxLevelReached,
    #[error("no such id in the catalog")]
    UnknownId,
    #[error("no lottery round in progress")]
    RoundInactive,
    #[error("cell was already revealed")]
    AlreadyRevealed,
    #[error("no reveals left this round")]
    RevealsExhausted,
    #[error("nothing is placed there")]
    EmptyCell,
    #[error("not enough shares to sell")]
    InsufficientShares,
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("theme is locked")]
    ThemeLocked,
    #[error("name must be at least 3 characters")]
    InvalidName,
}

impl Rejection {
    /// Stable kebab-case code, identical to the serde representation.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::InsufficientFunds => "insufficient-funds",
            Rejection::AlreadyOwned => "already-owned",
            Rejection::NotOwned => "not-owned",
            Rejection::AlreadyClaimed => "already-claimed",
            Rejection::BelowThreshold => "below-threshold",
            Rejection::OutOfBounds => "out-of-bounds",
            Rejection::CellOccupied => "cell-occupied",
            Rejection::SlotBusy => "slot-busy",
            Rejection::LevelTooLow => "level-too-low",
            Rejection::CooldownActive => "cooldown-active",
            Rejection::MaxLevelReached => "max-level-reached",
            Rejection::UnknownId => "unknown-id",
            Rejection::RoundInactive => "round-inactive",
            Rejection::AlreadyRevealed => "already-revealed",
            Rejection::RevealsExhausted => "reveals-exhausted",
            Rejection::EmptyCell => "empty-cell",
            Rejection::InsufficientShares => "insufficient-shares",
            Rejection::InvalidAmount => "invalid-amount",
            Rejection::ThemeLocked => "theme-locked",
            Rejection::InvalidName => "invalid-name",
        }
    }
}

/// Result of an engine call: the effect to apply, or why nothing happened.
pub type Outcome = Result<Effect, Rejection>;
