/// Mining upgrade catalog and per-session upgrade levels.

use serde::Serialize;

/// Highest level any upgrade can reach.
pub const MAX_LEVEL: u32 = 15;

/// Every click yields at least this much.
pub const BASE_CLICK_POWER: u64 = 1;

/// Chance that a manual click also grants 1 XP.
pub const CLICK_XP_CHANCE: f64 = 0.1;

/// Whether an upgrade boosts clicks or passive income.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeKind {
    /// Adds to every manual click.
    Click,
    /// Adds to income per second.
    Auto,
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: UpgradeKind,
    pub base_cost: u64,
    pub base_power: u64,
    pub cost_multiplier: f64,
}

pub static UPGRADES: [UpgradeDef; 5] = [
    UpgradeDef {
        id: "gpu_1",
        name: "GTX 1060 Mining",
        kind: UpgradeKind::Auto,
        base_cost: 500,
        base_power: 5,
        cost_multiplier: 1.5,
    },
    UpgradeDef {
        id: "click_1",
        name: "New Mouse",
        kind: UpgradeKind::Click,
        base_cost: 200,
        base_power: 1,
        cost_multiplier: 1.8,
    },
    UpgradeDef {
        id: "gpu_2",
        name: "RTX 4090 Rig",
        kind: UpgradeKind::Auto,
        base_cost: 5_000,
        base_power: 45,
        cost_multiplier: 1.6,
    },
    UpgradeDef {
        id: "click_2",
        name: "Mechanical Keyboard",
        kind: UpgradeKind::Click,
        base_cost: 1_500,
        base_power: 10,
        cost_multiplier: 2.0,
    },
    UpgradeDef {
        id: "farm_1",
        name: "Antminer S19 Pro",
        kind: UpgradeKind::Auto,
        base_cost: 25_000,
        base_power: 250,
        cost_multiplier: 1.7,
    },
];

pub fn find_upgrade(id: &str) -> Option<&'static UpgradeDef> {
    UPGRADES.iter().find(|u| u.id == id)
}

/// An upgrade the player can level up.
#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub def: &'static UpgradeDef,
    pub level: u32,
}

impl Upgrade {
    pub fn new(def: &'static UpgradeDef) -> Self {
        Self { def, level: 0 }
    }

    /// `floor(base_cost × multiplier^level)`.
    pub fn cost(&self) -> u64 {
        (self.def.base_cost as f64 * self.def.cost_multiplier.powi(self.level as i32)).floor()
            as u64
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Contribution of this upgrade at its current level.
    pub fn power(&self) -> u64 {
        self.def.base_power * self.level as u64
    }
}

/// Mining rig state.
#[derive(Clone, Debug, PartialEq)]
pub struct MiningState {
    pub upgrades: Vec<Upgrade>,
    /// Manual clicks this session.
    pub total_clicks: u64,
    /// Total credits produced (clicks + passive).
    pub mined_total: u64,
}

impl MiningState {
    pub fn new() -> Self {
        Self {
            upgrades: UPGRADES.iter().map(Upgrade::new).collect(),
            total_clicks: 0,
            mined_total: 0,
        }
    }

    pub fn upgrade(&self, id: &str) -> Option<&Upgrade> {
        self.upgrades.iter().find(|u| u.def.id == id)
    }

    fn power_of(&self, kind: UpgradeKind) -> u64 {
        self.upgrades
            .iter()
            .filter(|u| u.def.kind == kind)
            .map(|u| u.power())
            .sum()
    }

    /// Credits per second from auto upgrades.
    pub fn auto_income(&self) -> u64 {
        self.power_of(UpgradeKind::Auto)
    }

    /// Credits per manual click.
    pub fn click_power(&self) -> u64 {
        BASE_CLICK_POWER + self.power_of(UpgradeKind::Click)
    }
}

impl Default for MiningState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_curve_floors() {
        let mut u = Upgrade::new(find_upgrade("gpu_1").unwrap());
        assert_eq!(u.cost(), 500);
        u.level = 1;
        assert_eq!(u.cost(), 750);
        u.level = 2;
        assert_eq!(u.cost(), 1_125);
        u.level = 3;
        assert_eq!(u.cost(), 1_687); // 1687.5 floored
    }

    #[test]
    fn fresh_rig_has_base_click_only() {
        let s = MiningState::new();
        assert_eq!(s.auto_income(), 0);
        assert_eq!(s.click_power(), 1);
    }

    #[test]
    fn power_sums_per_kind() {
        let mut s = MiningState::new();
        s.upgrades[0].level = 2; // gpu_1: 2 × 5
        s.upgrades[2].level = 1; // gpu_2: 1 × 45
        s.upgrades[1].level = 3; // click_1: 3 × 1
        s.upgrades[3].level = 1; // click_2: 1 × 10
        assert_eq!(s.auto_income(), 55);
        assert_eq!(s.click_power(), 1 + 3 + 10);
    }

    #[test]
    fn catalog_ids_unique() {
        for (i, a) in UPGRADES.iter().enumerate() {
            for b in &UPGRADES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
            assert!(a.cost_multiplier > 1.0);
        }
    }

    #[test]
    fn maxed_at_fifteen() {
        let mut u = Upgrade::new(&UPGRADES[0]);
        u.level = 14;
        assert!(!u.is_maxed());
        u.level = 15;
        assert!(u.is_maxed());
    }
}
