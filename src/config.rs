//! Runtime session settings, handed over by the host page as JSON.

use serde::Deserialize;

use crate::economy::STARTING_BALANCE;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub starting_balance: i64,
    /// Fixed RNG seed. `None` draws one from the platform.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse settings; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SessionConfig::from_json("{}").unwrap(), SessionConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = SessionConfig::from_json(r#"{"seed": 42}"#).unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.starting_balance, 10_000);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(SessionConfig::from_json(r#"{"starting_balance": "lots"}"#).is_err());
    }
}
