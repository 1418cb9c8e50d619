//! Economy ledger: the player's balance, experience and unlocked themes.
//!
//! Pure accumulation. Nothing here validates; components check
//! affordability before handing over a negative [`Effect`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Balance every new session starts with.
pub const STARTING_BALANCE: i64 = 10_000;

/// Experience per career level (used for job gating).
pub const XP_PER_CAREER_LEVEL: u64 = 2_000;

/// Visual themes the player can unlock and switch between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Default,
    Matrix,
    Gold,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Default, Theme::Matrix, Theme::Gold]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Matrix => "matrix",
            Theme::Gold => "gold",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "Dark Blue",
            Theme::Matrix => "Hacker Green",
            Theme::Gold => "Gold Tycoon",
        }
    }

    pub fn from_id(id: &str) -> Option<Theme> {
        Theme::all().iter().copied().find(|t| t.id() == id)
    }
}

/// What a successful operation does to the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Effect {
    /// Signed currency delta.
    pub currency: i64,
    pub xp: u64,
    /// Theme to add to the unlocked set.
    pub theme: Option<Theme>,
}

impl Effect {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn currency(amount: i64) -> Self {
        Self {
            currency: amount,
            ..Self::default()
        }
    }

    /// Credit of an unsigned amount; saturates at `i64::MAX`.
    pub fn credit(amount: u64) -> Self {
        Self::currency(i64::try_from(amount).unwrap_or(i64::MAX))
    }

    /// Debit of an unsigned cost; saturates at `-i64::MAX`.
    pub fn debit(cost: u64) -> Self {
        Self::currency(-i64::try_from(cost).unwrap_or(i64::MAX))
    }

    pub fn xp(amount: u64) -> Self {
        Self {
            xp: amount,
            ..Self::default()
        }
    }

    pub fn unlock(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn with_xp(mut self, amount: u64) -> Self {
        self.xp = self.xp.saturating_add(amount);
        self
    }

    /// Fold another effect into this one (used to sum a batch of ticks).
    pub fn merge(&mut self, other: &Effect) {
        self.currency = self.currency.saturating_add(other.currency);
        self.xp = self.xp.saturating_add(other.xp);
        if other.theme.is_some() {
            self.theme = other.theme;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.currency == 0 && self.xp == 0 && self.theme.is_none()
    }
}

/// The player and the shared counters every component reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Chosen at onboarding; `None` until then.
    pub name: Option<String>,
    pub balance: i64,
    /// Never decreases.
    pub experience: u64,
    pub unlocked_themes: BTreeSet<Theme>,
    pub active_theme: Theme,
}

impl Player {
    pub fn new(starting_balance: i64) -> Self {
        let mut unlocked_themes = BTreeSet::new();
        unlocked_themes.insert(Theme::Default);
        Self {
            name: None,
            balance: starting_balance,
            experience: 0,
            unlocked_themes,
            active_theme: Theme::Default,
        }
    }

    /// Saturates at the `i64` bounds instead of wrapping.
    pub fn apply_delta(&mut self, currency: i64) {
        self.balance = self.balance.saturating_add(currency);
    }

    pub fn apply_xp(&mut self, amount: u64) {
        self.experience = self.experience.saturating_add(amount);
    }

    pub fn apply(&mut self, effect: &Effect) {
        self.apply_delta(effect.currency);
        self.apply_xp(effect.xp);
        if let Some(theme) = effect.theme {
            self.unlocked_themes.insert(theme);
        }
    }

    pub fn can_afford(&self, cost: u64) -> bool {
        self.balance >= 0 && self.balance as u64 >= cost
    }

    /// Level used to gate freelance jobs: one level per 2000 XP, starting at 1.
    pub fn career_level(&self) -> u32 {
        (self.experience / XP_PER_CAREER_LEVEL) as u32 + 1
    }

    pub fn has_theme(&self, theme: Theme) -> bool {
        self.unlocked_themes.contains(&theme)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}
