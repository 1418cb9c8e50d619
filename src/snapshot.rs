//! Read-only view of a session for the presentation layer.
//!
//! Built fresh on every call; nothing here is persisted. Unrevealed lottery
//! cells are masked so the view never leaks where the prizes are.

use serde::Serialize;

use crate::economy::Theme;
use crate::games::home::grid::Placement;
use crate::games::jobs::JOBS;
use crate::games::lottery::state::{CellContent, PayoutTier, RoundPhase};
use crate::games::mining::UpgradeKind;
use crate::progression::Reward;
use crate::scheduler::TimerKind;
use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerView {
    pub name: Option<String>,
    pub balance: i64,
    pub experience: u64,
    pub level: u32,
    pub career_level: u32,
    pub unlocked_themes: Vec<Theme>,
    pub active_theme: Theme,
    /// Display name of the active theme.
    pub theme_name: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RungView {
    pub level: u32,
    pub xp_threshold: u64,
    pub reward: Reward,
    /// Reward as shown on the rung ("4000 CR", "Theme: Hacker Green").
    pub description: String,
    pub claimed: bool,
    pub claimable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LadderView {
    pub entries: Vec<RungView>,
    pub next_level: Option<u32>,
    pub progress_to_next: f64,
    pub claimable: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyView {
    pub available: bool,
    pub remaining_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpgradeView {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: UpgradeKind,
    pub level: u32,
    pub cost: u64,
    pub maxed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MiningView {
    pub running: bool,
    pub click_power: u64,
    pub auto_income: u64,
    pub total_clicks: u64,
    pub upgrades: Vec<UpgradeView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobView {
    pub id: &'static str,
    pub title: &'static str,
    pub duration_secs: u32,
    pub reward: u64,
    pub xp_reward: u64,
    pub level_required: u32,
    pub unlocked: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobsView {
    pub active: Option<&'static str>,
    pub progress: f64,
    pub last_completed: Option<&'static str>,
    pub catalog: Vec<JobView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomeView {
    pub inventory: Vec<&'static str>,
    pub placements: Vec<Placement>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LotteryView {
    pub phase: RoundPhase,
    pub reveals_left: u8,
    /// `None` for cells still sealed.
    pub cells: Vec<Option<CellContent>>,
    pub last_payout: Option<PayoutTier>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TradingView {
    pub quote: u64,
    pub shares: u64,
    pub holdings_value: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub ladder: LadderView,
    pub daily: DailyView,
    pub mining: MiningView,
    pub jobs: JobsView,
    pub home: HomeView,
    pub lottery: LotteryView,
    pub trading: TradingView,
    pub timers: Vec<TimerKind>,
    pub elapsed_ticks: u64,
}

impl Session {
    pub fn snapshot(&self, now_ms: u64) -> Snapshot {
        let player = self.player();
        let xp = player.experience;
        let career_level = player.career_level();
        let ladder = self.ladder();
        let mining = self.mining();
        let jobs = self.jobs();
        let lottery = self.lottery();
        let trading = self.trading();

        Snapshot {
            player: PlayerView {
                name: player.name.clone(),
                balance: player.balance,
                experience: xp,
                level: ladder.current_level(xp),
                career_level,
                unlocked_themes: player.unlocked_themes.iter().copied().collect(),
                active_theme: player.active_theme,
                theme_name: player.active_theme.name(),
            },
            ladder: LadderView {
                entries: ladder
                    .entries()
                    .iter()
                    .map(|e| RungView {
                        level: e.level,
                        xp_threshold: e.xp_threshold,
                        reward: e.reward,
                        description: e.reward.description(),
                        claimed: e.claimed,
                        claimable: e.is_claimable(xp),
                    })
                    .collect(),
                next_level: ladder.next_reward(xp).map(|e| e.level),
                progress_to_next: ladder.progress_to_next(xp),
                claimable: ladder.claimable_count(xp),
            },
            daily: DailyView {
                available: self.daily().is_available(now_ms),
                remaining_ms: self.daily().remaining_ms(now_ms),
            },
            mining: MiningView {
                running: self.is_mining(),
                click_power: mining.click_power(),
                auto_income: mining.auto_income(),
                total_clicks: mining.total_clicks,
                upgrades: mining
                    .upgrades
                    .iter()
                    .map(|u| UpgradeView {
                        id: u.def.id,
                        name: u.def.name,
                        kind: u.def.kind,
                        level: u.level,
                        cost: u.cost(),
                        maxed: u.is_maxed(),
                    })
                    .collect(),
            },
            jobs: JobsView {
                active: jobs.slot.active_job().map(|j| j.id),
                progress: jobs.slot.progress(),
                last_completed: jobs.last_completed,
                catalog: JOBS
                    .iter()
                    .map(|j| JobView {
                        id: j.id,
                        title: j.title,
                        duration_secs: j.duration_secs,
                        reward: j.reward,
                        xp_reward: j.xp_reward,
                        level_required: j.level_required,
                        unlocked: career_level >= j.level_required,
                    })
                    .collect(),
            },
            home: HomeView {
                inventory: self.home().inventory.iter().copied().collect(),
                placements: self.placements(),
            },
            lottery: LotteryView {
                phase: lottery.phase,
                reveals_left: lottery.reveals_left(),
                cells: lottery
                    .cells
                    .iter()
                    .map(|c| c.revealed.then_some(c.content))
                    .collect(),
                last_payout: lottery.last_payout,
            },
            trading: TradingView {
                quote: trading.quote,
                shares: trading.shares,
                holdings_value: trading.holdings_value(),
            },
            timers: self.scheduler().armed(),
            elapsed_ticks: self.elapsed_ticks(),
        }
    }

    /// [`Session::snapshot`] encoded as JSON for the host page.
    pub fn snapshot_json(&self, now_ms: u64) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot(now_ms))
    }
}
