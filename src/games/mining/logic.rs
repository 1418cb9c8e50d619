//! Mining rig logic: pure functions over `MiningState`, fully testable.

use rand::Rng;

use super::state::{MiningState, CLICK_XP_CHANCE};
use crate::economy::{Effect, Player};
use crate::error::{Outcome, Rejection};

/// Buy one level of upgrade `id`. Returns the debit to apply.
pub fn purchase(state: &mut MiningState, player: &Player, id: &str) -> Outcome {
    let upgrade = state
        .upgrades
        .iter_mut()
        .find(|u| u.def.id == id)
        .ok_or(Rejection::UnknownId)?;
    if upgrade.is_maxed() {
        return Err(Rejection::MaxLevelReached);
    }
    let cost = upgrade.cost();
    if !player.can_afford(cost) {
        return Err(Rejection::InsufficientFunds);
    }
    upgrade.level += 1;
    log::debug!("{} upgraded to level {} for {}", upgrade.def.id, upgrade.level, cost);
    Ok(Effect::debit(cost))
}

/// Manual mining action: click power in credits, plus a 10% shot at 1 XP.
pub fn click<R: Rng + ?Sized>(state: &mut MiningState, rng: &mut R) -> Effect {
    let power = state.click_power();
    state.total_clicks += 1;
    state.mined_total += power;
    let effect = Effect::credit(power);
    if rng.gen_bool(CLICK_XP_CHANCE) {
        effect.with_xp(1)
    } else {
        effect
    }
}

/// One passive income payout (fires once per second while mining runs).
pub fn payout(state: &mut MiningState) -> Effect {
    let income = state.auto_income();
    state.mined_total += income;
    Effect::credit(income)
}
