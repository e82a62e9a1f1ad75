//! Service configuration.
//!
//! Settings are parsed from an in-memory TOML snippet; nothing is read from disk.

use crate::error::{Result, RosterError};
use crate::id::IdStrategy;
use serde::{Deserialize, Serialize};

/// Legal age required to register a user.
pub const DEFAULT_MIN_AGE: u32 = 18;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

fn default_min_age() -> u32 {
    DEFAULT_MIN_AGE
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl RosterConfig {
    /// Parses a config from a TOML snippet. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The minimum age may be raised above the legal age, never lowered.
    pub fn validate(&self) -> Result<()> {
        if self.min_age < DEFAULT_MIN_AGE {
            return Err(RosterError::config(format!(
                "min_age must be at least {DEFAULT_MIN_AGE}, got {}",
                self.min_age
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RosterConfig::default();
        assert_eq!(config.min_age, 18);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
    }

    #[test]
    fn test_from_toml_str() {
        let config = RosterConfig::from_toml_str("id_strategy = \"sequential\"").unwrap();
        assert_eq!(config.min_age, 18);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);

        let config = RosterConfig::from_toml_str("min_age = 21").unwrap();
        assert_eq!(config.min_age, 21);
    }

    #[test]
    fn test_rejects_min_age_below_legal_age() {
        for content in ["min_age = 0", "min_age = 1", "min_age = 17"] {
            let err = RosterConfig::from_toml_str(content).unwrap_err();
            assert!(err.is_config(), "{content} should be rejected");
        }
        assert!(RosterConfig::from_toml_str("min_age = 18").is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RosterConfig {
            min_age: 21,
            id_strategy: IdStrategy::Sequential,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(RosterConfig::from_toml_str(&text).unwrap(), config);
    }
}
