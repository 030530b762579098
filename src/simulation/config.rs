use crate::game::tile_set::SET_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Match parameters, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default = "default_player_names")]
    pub player_names: [String; 2],
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,
}

fn default_player_names() -> [String; 2] {
    ["Player 1".to_string(), "Player 2".to_string()]
}

fn default_hand_size() -> usize {
    10
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            player_names: default_player_names(),
            hand_size: default_hand_size(),
        }
    }
}

impl MatchConfig {
    /// Load and validate a config from a JSON file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::Invalid("hand_size must be at least 1".to_string()));
        }
        if self.hand_size * 2 > SET_SIZE {
            return Err(ConfigError::Invalid(format!(
                "hand_size {} needs {} tiles, the set only has {}",
                self.hand_size,
                self.hand_size * 2,
                SET_SIZE
            )));
        }
        if self.player_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::Invalid("player names must not be empty".to_string()));
        }
        if self.player_names[0] == self.player_names[1] {
            return Err(ConfigError::Invalid(format!(
                "player names must differ, both are '{}'",
                self.player_names[0]
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
        let config = MatchConfig::default();
        assert_eq!(config.hand_size, 10);
        assert_eq!(config.player_names[0], "Player 1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MatchConfig::from_json(r#"{ "hand_size": 7 }"#).expect("valid config");
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.player_names[1], "Player 2");

        let config = MatchConfig::from_json("{}").expect("valid config");
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_custom_names() {
        let config = MatchConfig::from_json(r#"{ "player_names": ["Ana", "Bo"] }"#)
            .expect("valid config");
        assert_eq!(config.player_names, ["Ana".to_string(), "Bo".to_string()]);
    }

    #[test]
    fn test_hand_size_limits() {
        assert!(matches!(
            MatchConfig::from_json(r#"{ "hand_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            MatchConfig::from_json(r#"{ "hand_size": 15 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(MatchConfig::from_json(r#"{ "hand_size": 14 }"#).is_ok());
    }

    #[test]
    fn test_bad_names() {
        assert!(MatchConfig::from_json(r#"{ "player_names": ["X", "X"] }"#).is_err());
        assert!(MatchConfig::from_json(r#"{ "player_names": ["", "Y"] }"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            MatchConfig::from_json("{ hand_size: "),
            Err(ConfigError::JsonError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            MatchConfig::from_file("does-not-exist.json"),
            Err(ConfigError::IoError(_))
        ));
    }
}
