//! The engine context the presentation layer holds.
//!
//! Every call goes to exactly one component, which validates and returns an
//! [`Effect`]; the session applies it to the [`Player`] ledger. Timers live in
//! the [`Scheduler`] and are driven by [`Session::tick`] / [`Session::advance`].

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SessionConfig;
use crate::economy::{Effect, Player, Theme};
use crate::error::{Outcome, Rejection};
use crate::games::home::grid::{anchor_of, item_at, placements, Placement};
use crate::games::home::{self, HomeState};
use crate::games::jobs::{self, JobBoard};
use crate::games::lottery::{self, LotteryState};
use crate::games::mining::{self, MiningState};
use crate::games::trading::{self, TradingDesk};
use crate::games::TimerDriven;
use crate::platform;
use crate::progression::{DailyBonus, Ladder};
use crate::scheduler::{Scheduler, TimerKind};
use crate::time::SessionClock;

/// Shortest accepted player name, after trimming.
pub const MIN_NAME_LEN: usize = 3;

pub struct Session {
    player: Player,
    ladder: Ladder,
    daily: DailyBonus,
    mining: MiningState,
    jobs: JobBoard,
    home: HomeState,
    lottery: LotteryState,
    trading: TradingDesk,
    scheduler: Scheduler,
    clock: SessionClock,
    rng: StdRng,
    elapsed_ticks: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let seed = config.seed.unwrap_or_else(platform::entropy_seed);
        log::info!(
            "session created (balance {}, seed {})",
            config.starting_balance,
            seed
        );
        Self {
            player: Player::new(config.starting_balance),
            ladder: Ladder::generate(),
            daily: DailyBonus::new(),
            mining: MiningState::new(),
            jobs: JobBoard::new(),
            home: HomeState::new(),
            lottery: LotteryState::new(),
            trading: TradingDesk::new(),
            scheduler: Scheduler::new(),
            clock: SessionClock::new(),
            rng: StdRng::seed_from_u64(seed),
            elapsed_ticks: 0,
        }
    }

    /// Default settings with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SessionConfig::seeded(seed))
    }

    fn settle(&mut self, effect: Effect) -> Effect {
        if !effect.is_empty() {
            self.player.apply(&effect);
            log::trace!(
                "applied {:+} CR, +{} XP -> balance {}",
                effect.currency,
                effect.xp,
                self.player.balance
            );
        }
        effect
    }

    // ── Accessors ──────────────────────────────────────────────

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn daily(&self) -> &DailyBonus {
        &self.daily
    }

    pub fn mining(&self) -> &MiningState {
        &self.mining
    }

    pub fn jobs(&self) -> &JobBoard {
        &self.jobs
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn lottery(&self) -> &LotteryState {
        &self.lottery
    }

    pub fn trading(&self) -> &TradingDesk {
        &self.trading
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Ladder level shown to the player (thresholds crossed).
    pub fn level(&self) -> u32 {
        self.ladder.current_level(self.player.experience)
    }

    // ── Ledger ─────────────────────────────────────────────────

    pub fn credit_currency(&mut self, amount: u64) -> Effect {
        self.settle(Effect::credit(amount))
    }

    /// Unconditional debit. Affordability is the caller's concern.
    pub fn debit_currency(&mut self, amount: u64) -> Effect {
        self.settle(Effect::debit(amount))
    }

    pub fn grant_xp(&mut self, amount: u64) -> Effect {
        self.settle(Effect::xp(amount))
    }

    // ── Profile ────────────────────────────────────────────────

    pub fn set_name(&mut self, name: &str) -> Result<(), Rejection> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(Rejection::InvalidName);
        }
        log::info!("player name set to {}", name);
        self.player.name = Some(name.to_string());
        Ok(())
    }

    pub fn set_theme(&mut self, id: &str) -> Result<(), Rejection> {
        let theme = Theme::from_id(id).ok_or(Rejection::UnknownId)?;
        if !self.player.has_theme(theme) {
            return Err(Rejection::ThemeLocked);
        }
        self.player.active_theme = theme;
        Ok(())
    }

    // ── Progression ────────────────────────────────────────────

    pub fn claim_ladder_reward(&mut self, level: u32) -> Outcome {
        let effect = self.ladder.claim(level, self.player.experience)?;
        log::info!("ladder level {} claimed", level);
        Ok(self.settle(effect))
    }

    pub fn claim_daily_bonus(&mut self, now_ms: u64) -> Outcome {
        let effect = self.daily.claim(now_ms)?;
        log::info!("daily bonus claimed");
        Ok(self.settle(effect))
    }

    // ── Mining ─────────────────────────────────────────────────

    pub fn purchase_upgrade(&mut self, id: &str) -> Outcome {
        let effect = mining::logic::purchase(&mut self.mining, &self.player, id)?;
        Ok(self.settle(effect))
    }

    pub fn mine_click(&mut self) -> Effect {
        let effect = mining::logic::click(&mut self.mining, &mut self.rng);
        self.settle(effect)
    }

    /// Arm passive income (the mining screen is open).
    pub fn start_mining(&mut self) {
        self.scheduler.start(TimerKind::MiningIncome);
    }

    /// Disarm passive income. No payout arrives after this.
    pub fn stop_mining(&mut self) {
        self.scheduler.cancel(TimerKind::MiningIncome);
    }

    pub fn is_mining(&self) -> bool {
        self.scheduler.is_armed(TimerKind::MiningIncome)
    }

    // ── Jobs ───────────────────────────────────────────────────

    pub fn start_job(&mut self, id: &str) -> Outcome {
        let effect = jobs::logic::start(&mut self.jobs, self.player.career_level(), id)?;
        self.scheduler.start(TimerKind::JobProgress);
        Ok(self.settle(effect))
    }

    // ── Home ───────────────────────────────────────────────────

    pub fn purchase_furniture(&mut self, id: &str) -> Outcome {
        let effect = home::logic::purchase(&mut self.home, &self.player, id)?;
        Ok(self.settle(effect))
    }

    pub fn place_furniture(&mut self, id: &str, x: usize, y: usize) -> Outcome {
        home::logic::place(&mut self.home, id, x, y)
    }

    /// Place `id` at `(x, y)`, first clearing whatever covers that cell.
    pub fn replace_furniture(&mut self, id: &str, x: usize, y: usize) -> Outcome {
        home::logic::replace_at(&mut self.home, id, x, y)
    }

    pub fn remove_furniture(&mut self, x: usize, y: usize) -> Outcome {
        home::logic::remove(&mut self.home, x, y)
    }

    pub fn click_cell(&mut self, selected: Option<&str>, x: usize, y: usize) -> Outcome {
        home::logic::click_cell(&mut self.home, selected, x, y)
    }

    /// The placement covering `(x, y)`, resolved through its origin.
    pub fn placement_at(&self, x: usize, y: usize) -> Option<Placement> {
        let (ox, oy) = anchor_of(&self.home.board, x, y)?;
        let item = item_at(&self.home.board, ox, oy)?;
        Some(Placement {
            item_id: item.id,
            x: ox,
            y: oy,
            width: item.width,
            height: item.height,
        })
    }

    pub fn placements(&self) -> Vec<Placement> {
        placements(&self.home.board)
    }

    // ── Lottery ────────────────────────────────────────────────

    pub fn start_lottery_round(&mut self) -> Outcome {
        let effect = lottery::logic::start(&mut self.lottery, &self.player, &mut self.rng)?;
        self.scheduler.cancel(TimerKind::LotteryReveal);
        Ok(self.settle(effect))
    }

    pub fn reveal_cell(&mut self, index: usize) -> Outcome {
        let effect = lottery::logic::reveal(&mut self.lottery, index)?;
        if !self.lottery.is_active() {
            self.scheduler.start(TimerKind::LotteryReveal);
        }
        Ok(self.settle(effect))
    }

    // ── Trading ────────────────────────────────────────────────

    pub fn set_quote(&mut self, price: u64) -> Result<(), Rejection> {
        trading::logic::set_quote(&mut self.trading, price)
    }

    pub fn buy_shares(&mut self, amount: u64) -> Outcome {
        let effect = trading::logic::buy(&mut self.trading, &self.player, amount)?;
        Ok(self.settle(effect))
    }

    pub fn sell_shares(&mut self, amount: u64) -> Outcome {
        let effect = trading::logic::sell(&mut self.trading, amount)?;
        Ok(self.settle(effect))
    }

    pub fn buy_max_shares(&mut self) -> Outcome {
        let effect = trading::logic::buy_max(&mut self.trading, &self.player)?;
        Ok(self.settle(effect))
    }

    pub fn sell_all_shares(&mut self) -> Outcome {
        let effect = trading::logic::sell_all(&mut self.trading)?;
        Ok(self.settle(effect))
    }

    // ── Time ───────────────────────────────────────────────────

    fn timer_target(&mut self, kind: TimerKind) -> &mut dyn TimerDriven {
        match kind {
            TimerKind::MiningIncome => &mut self.mining,
            TimerKind::JobProgress => &mut self.jobs,
            TimerKind::LotteryReveal => &mut self.lottery,
        }
    }

    /// Run `ticks` 100ms steps. Returns everything the timers paid out.
    pub fn tick(&mut self, ticks: u32) -> Effect {
        let mut total = Effect::none();
        for _ in 0..ticks {
            self.elapsed_ticks += 1;
            for kind in self.scheduler.step() {
                let fired = self.timer_target(kind).fire();
                if !fired.rearm {
                    self.scheduler.cancel(kind);
                }
                let effect = self.settle(fired.effect);
                total.merge(&effect);
            }
        }
        total
    }

    /// Feed a wall-clock reading; runs however many whole ticks it covers.
    pub fn advance(&mut self, now_ms: u64) -> Effect {
        let ticks = self.clock.advance(now_ms);
        self.tick(ticks)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::lottery::RoundPhase;
    use crate::games::mining::MAX_LEVEL;

    fn session() -> Session {
        Session::with_seed(7)
    }

    fn rich_session() -> Session {
        Session::new(SessionConfig {
            starting_balance: 10_000_000,
            seed: Some(7),
        })
    }

    // ── Ledger / profile ───────────────────────────────────────

    #[test]
    fn fresh_session() {
        let s = session();
        assert_eq!(s.player().balance, 10_000);
        assert_eq!(s.player().experience, 0);
        assert_eq!(s.level(), 0);
        assert!(s.scheduler().armed().is_empty());
    }

    #[test]
    fn ledger_calls_are_unconditional() {
        let mut s = session();
        s.debit_currency(15_000);
        assert_eq!(s.player().balance, -5_000);
        s.credit_currency(6_000);
        s.grant_xp(600);
        assert_eq!(s.player().balance, 1_000);
        assert_eq!(s.level(), 1);
    }

    #[test]
    fn huge_ledger_amounts_keep_their_sign() {
        let mut s = session();
        s.credit_currency(u64::MAX);
        assert_eq!(s.player().balance, i64::MAX);

        let mut s = session();
        s.debit_currency(u64::MAX);
        assert_eq!(s.player().balance, 10_000 - i64::MAX);
        s.debit_currency(1 << 63);
        assert_eq!(s.player().balance, i64::MIN);
    }

    #[test]
    fn name_is_trimmed_and_checked() {
        let mut s = session();
        assert_eq!(s.set_name("  ab  "), Err(Rejection::InvalidName));
        assert_eq!(s.player().name, None);
        s.set_name("  satoshi ").unwrap();
        assert_eq!(s.player().name.as_deref(), Some("satoshi"));
    }

    #[test]
    fn theme_must_be_unlocked() {
        let mut s = session();
        assert_eq!(s.set_theme("matrix"), Err(Rejection::ThemeLocked));
        assert_eq!(s.set_theme("neon"), Err(Rejection::UnknownId));
        s.grant_xp(crate::progression::ladder::xp_threshold(10));
        s.claim_ladder_reward(10).unwrap();
        s.set_theme("matrix").unwrap();
        assert_eq!(s.player().active_theme, Theme::Matrix);
    }

    // ── Progression ────────────────────────────────────────────

    #[test]
    fn ladder_claim_credits_once() {
        let mut s = session();
        assert_eq!(s.claim_ladder_reward(1), Err(Rejection::BelowThreshold));
        s.grant_xp(500);
        assert_eq!(s.claim_ladder_reward(1), Ok(Effect::currency(2_000)));
        assert_eq!(s.claim_ladder_reward(1), Err(Rejection::AlreadyClaimed));
        assert_eq!(s.player().balance, 12_000);
    }

    #[test]
    fn daily_bonus_gate() {
        let mut s = session();
        let t0 = 1_700_000_000_000;
        s.claim_daily_bonus(t0).unwrap();
        assert_eq!(s.player().balance, 15_000);
        assert_eq!(s.claim_daily_bonus(t0 + 1_000), Err(Rejection::CooldownActive));
        assert_eq!(s.player().balance, 15_000);
    }

    // ── Mining ─────────────────────────────────────────────────

    #[test]
    fn income_only_while_mining() {
        let mut s = session();
        s.purchase_upgrade("gpu_1").unwrap();
        assert_eq!(s.player().balance, 9_500);
        s.tick(30);
        assert_eq!(s.player().balance, 9_500);
        s.start_mining();
        assert_eq!(s.tick(30).currency, 15);
        s.stop_mining();
        s.tick(100);
        assert_eq!(s.player().balance, 9_515);
    }

    #[test]
    fn upgrade_caps_at_max_level() {
        let mut s = rich_session();
        for _ in 0..MAX_LEVEL {
            s.purchase_upgrade("click_1").unwrap();
        }
        let before = s.player().clone();
        assert_eq!(s.purchase_upgrade("click_1"), Err(Rejection::MaxLevelReached));
        assert_eq!(s.player(), &before);
    }

    #[test]
    fn clicks_pay_click_power() {
        let mut s = session();
        let mut earned = 0;
        let mut xp = 0;
        for _ in 0..1_000 {
            let e = s.mine_click();
            earned += e.currency;
            xp += e.xp;
        }
        assert_eq!(earned, 1_000);
        // 10% chance per click
        assert!((50..=150).contains(&xp), "xp = {}", xp);
        assert_eq!(s.mining().total_clicks, 1_000);
    }

    // ── Jobs ───────────────────────────────────────────────────

    #[test]
    fn job_runs_to_completion_once() {
        let mut s = session();
        s.start_job("captcha").unwrap();
        assert!(s.scheduler().is_armed(TimerKind::JobProgress));
        assert_eq!(s.start_job("ad_click"), Err(Rejection::SlotBusy));
        s.tick(49);
        assert_eq!(s.player().balance, 10_000);
        assert_eq!(s.tick(1), Effect::currency(100).with_xp(10));
        assert!(!s.scheduler().is_armed(TimerKind::JobProgress));
        s.tick(100);
        assert_eq!(s.player().balance, 10_100);
    }

    #[test]
    fn job_gated_by_career_level() {
        let mut s = session();
        assert_eq!(s.start_job("copywriting"), Err(Rejection::LevelTooLow));
        s.grant_xp(2_000);
        assert!(s.start_job("copywriting").is_ok());
    }

    // ── Home ───────────────────────────────────────────────────

    #[test]
    fn furniture_flow() {
        let mut s = session();
        s.purchase_furniture("desk_wood").unwrap();
        assert_eq!(s.player().balance, 5_000);
        s.place_furniture("desk_wood", 4, 0).unwrap();
        let p = s.placement_at(5, 0).unwrap();
        assert_eq!((p.item_id, p.x, p.y), ("desk_wood", 4, 0));
        s.click_cell(None, 5, 0).unwrap();
        assert!(s.placements().is_empty());
        assert_eq!(s.placement_at(5, 0), None);
    }

    // ── Lottery ────────────────────────────────────────────────

    #[test]
    fn lottery_round_and_delayed_reveal() {
        let mut s = session();
        s.start_lottery_round().unwrap();
        assert_eq!(s.player().balance, 9_000);
        assert_eq!(s.player().experience, 25);
        assert_eq!(s.start_lottery_round(), Err(Rejection::SlotBusy));
        for i in 0..3 {
            s.reveal_cell(i).unwrap();
        }
        assert_eq!(s.lottery().phase, RoundPhase::Finished);
        assert!(s.scheduler().is_armed(TimerKind::LotteryReveal));
        let tier = s.lottery().last_payout.unwrap();
        assert_eq!(s.player().balance, 9_000 + tier.currency() as i64);

        s.tick(4);
        assert!(s.lottery().cells.iter().filter(|c| c.revealed).count() == 3);
        s.tick(1);
        assert!(s.lottery().cells.iter().all(|c| c.revealed));
        assert!(!s.scheduler().is_armed(TimerKind::LotteryReveal));
    }

    #[test]
    fn lottery_needs_ticket_money() {
        let mut s = Session::new(SessionConfig {
            starting_balance: 999,
            seed: Some(1),
        });
        assert_eq!(s.start_lottery_round(), Err(Rejection::InsufficientFunds));
        assert_eq!(s.player().balance, 999);
    }

    // ── Trading ────────────────────────────────────────────────

    #[test]
    fn trading_flow() {
        let mut s = session();
        s.set_quote(250).unwrap();
        s.buy_max_shares().unwrap();
        assert_eq!(s.trading().shares, 40);
        assert_eq!(s.player().balance, 0);
        s.set_quote(300).unwrap();
        let e = s.sell_all_shares().unwrap();
        assert_eq!(e, Effect::currency(12_000).with_xp(8));
        assert_eq!(s.player().balance, 12_000);
        assert_eq!(s.sell_shares(1), Err(Rejection::InsufficientShares));
    }

    // ── Time ───────────────────────────────────────────────────

    #[test]
    fn advance_converts_wall_clock() {
        let mut s = session();
        s.start_job("ad_click").unwrap();
        let t0 = 1_700_000_000_000;
        s.advance(t0);
        for step in 1..=6 {
            s.advance(t0 + step * 500);
        }
        assert_eq!(s.elapsed_ticks(), 30);
        assert_eq!(s.player().balance, 10_050);
    }

    #[test]
    fn advance_clamps_long_gaps() {
        let mut s = session();
        s.advance(0);
        s.advance(3_600_000);
        assert_eq!(s.elapsed_ticks(), 5);
    }
}
