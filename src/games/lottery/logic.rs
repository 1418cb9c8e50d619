//! Lottery round logic.

use rand::seq::index;
use rand::Rng;

use super::state::{
    LotteryState, PayoutTier, RoundPhase, CELL_COUNT, MAX_REVEALS, PRIZE_COUNT, TICKET_COST,
    TICKET_XP,
};
use crate::economy::{Effect, Player};
use crate::error::{Outcome, Rejection};

/// Buy a ticket and deal a fresh round with 4 prizes placed uniformly at random.
pub fn start<R: Rng + ?Sized>(state: &mut LotteryState, player: &Player, rng: &mut R) -> Outcome {
    if state.is_active() {
        return Err(Rejection::SlotBusy);
    }
    if !player.can_afford(TICKET_COST) {
        return Err(Rejection::InsufficientFunds);
    }
    let prizes = index::sample(rng, CELL_COUNT, PRIZE_COUNT).into_vec();
    state.deal(&prizes);
    state.rounds_played += 1;
    Ok(Effect::debit(TICKET_COST).with_xp(TICKET_XP))
}

/// Reveal cell `index`. The third reveal finishes the round and returns the
/// payout; earlier reveals return an empty effect.
pub fn reveal(state: &mut LotteryState, index: usize) -> Outcome {
    if !state.is_active() {
        return Err(Rejection::RoundInactive);
    }
    if state.reveals >= MAX_REVEALS {
        return Err(Rejection::RevealsExhausted);
    }
    let cell = state.cells.get_mut(index).ok_or(Rejection::OutOfBounds)?;
    if cell.revealed {
        return Err(Rejection::AlreadyRevealed);
    }
    cell.revealed = true;
    state.reveals += 1;
    if state.reveals < MAX_REVEALS {
        return Ok(Effect::none());
    }
    Ok(finish(state))
}

fn finish(state: &mut LotteryState) -> Effect {
    let tier = PayoutTier::for_prizes(state.revealed_prizes());
    state.phase = RoundPhase::Finished;
    state.last_payout = Some(tier);
    log::info!("lottery round finished: {:?} (+{} CR)", tier, tier.currency());
    Effect::credit(tier.currency()).with_xp(tier.xp())
}

/// Show every cell of a finished round.
pub fn reveal_all(state: &mut LotteryState) {
    if state.phase != RoundPhase::Finished {
        return;
    }
    for cell in state.cells.iter_mut() {
        cell.revealed = true;
    }
}
