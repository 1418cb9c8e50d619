//! Trading desk orders. The quote is whatever the host last pushed.

use super::state::TradingDesk;
use crate::economy::{Effect, Player};
use crate::error::{Outcome, Rejection};

/// Update the quote. Zero is rejected; a share always costs something.
pub fn set_quote(desk: &mut TradingDesk, price: u64) -> Result<(), Rejection> {
    if price == 0 {
        return Err(Rejection::InvalidAmount);
    }
    desk.quote = price;
    Ok(())
}

pub fn buy(desk: &mut TradingDesk, player: &Player, amount: u64) -> Outcome {
    if amount == 0 {
        return Err(Rejection::InvalidAmount);
    }
    let cost = amount
        .checked_mul(desk.quote)
        .ok_or(Rejection::InsufficientFunds)?;
    if !player.can_afford(cost) {
        return Err(Rejection::InsufficientFunds);
    }
    desk.shares += amount;
    desk.trades += 1;
    log::debug!("bought {} @ {}", amount, desk.quote);
    Ok(Effect::debit(cost))
}

pub fn sell(desk: &mut TradingDesk, amount: u64) -> Outcome {
    if amount == 0 {
        return Err(Rejection::InvalidAmount);
    }
    if desk.shares < amount {
        return Err(Rejection::InsufficientShares);
    }
    let proceeds = amount
        .checked_mul(desk.quote)
        .and_then(|v| i64::try_from(v).ok())
        .ok_or(Rejection::InvalidAmount)?;
    desk.shares -= amount;
    desk.trades += 1;
    log::debug!("sold {} @ {}", amount, desk.quote);
    Ok(Effect::currency(proceeds).with_xp(TradingDesk::sell_xp(amount)))
}

/// Buy as many shares as the balance covers.
pub fn buy_max(desk: &mut TradingDesk, player: &Player) -> Outcome {
    let affordable = u64::try_from(player.balance).unwrap_or(0) / desk.quote;
    if affordable == 0 {
        return Err(Rejection::InsufficientFunds);
    }
    buy(desk, player, affordable)
}

pub fn sell_all(desk: &mut TradingDesk) -> Outcome {
    if desk.shares == 0 {
        return Err(Rejection::InsufficientShares);
    }
    sell(desk, desk.shares)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_buy_then_sell_at_same_quote_is_neutral(
            quote in 1u64..10_000,
            amount in 1u64..1_000,
        ) {
            let mut desk = TradingDesk::new();
            set_quote(&mut desk, quote).unwrap();
            let mut player = Player::new(100_000_000);
            let start = player.balance;
            let bought = buy(&mut desk, &player, amount).unwrap();
            player.apply(&bought);
            let sold = sell(&mut desk, amount).unwrap();
            player.apply(&sold);
            prop_assert_eq!(player.balance, start);
            prop_assert_eq!(desk.shares, 0);
        }

        #[test]
        fn prop_buy_max_never_overdraws(quote in 1u64..5_000, balance in 0i64..1_000_000) {
            let mut desk = TradingDesk::new();
            set_quote(&mut desk, quote).unwrap();
            let mut player = Player::new(balance);
            if let Ok(effect) = buy_max(&mut desk, &player) {
                player.apply(&effect);
                prop_assert!(player.balance >= 0);
                prop_assert!((player.balance as u64) < quote);
            }
        }
    }
}
