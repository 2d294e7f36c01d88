//! Configuration module - environment variable parsing

use std::env;
use std::path::PathBuf;

use crate::scoring::{FormatPreset, Player};

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log line format on stderr
    pub log_format: LogFormat,

    /// Player names, in scoreboard order
    pub player_names: [String; 2],
    /// Club / court shown on the scoreboard
    pub location: String,

    /// Match format, fixed for the whole match
    pub format: FormatPreset,
    /// Server of the first game
    pub first_server: Player,

    /// Directory receiving exported files
    pub export_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let format = match get("TENNIS_FORMAT") {
            Some(raw) => parse_choice(&raw)
                .and_then(|c| FormatPreset::from_choice(c).ok())
                .ok_or(ConfigError::InvalidValue {
                    var: "TENNIS_FORMAT",
                    value: raw,
                })?,
            None => FormatPreset::default(),
        };

        let log_format = match get("LOG_FORMAT").map(|v| v.trim().to_ascii_lowercase()) {
            None => LogFormat::Text,
            Some(v) if v == "text" => LogFormat::Text,
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) => {
                return Err(ConfigError::InvalidValue {
                    var: "LOG_FORMAT",
                    value: v,
                })
            }
        };

        let first_server = match get("TENNIS_FIRST_SERVER") {
            Some(raw) => match parse_choice(&raw) {
                Some(1) => Player::One,
                Some(2) => Player::Two,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "TENNIS_FIRST_SERVER",
                        value: raw,
                    })
                }
            },
            None => Player::One,
        };

        Ok(Self {
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format,
            player_names: [
                get("TENNIS_PLAYER1").unwrap_or_else(|| "Player 1".to_string()),
                get("TENNIS_PLAYER2").unwrap_or_else(|| "Player 2".to_string()),
            ],
            location: get("TENNIS_LOCATION").unwrap_or_default(),
            format,
            first_server,
            export_dir: get("TENNIS_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn parse_choice(raw: &str) -> Option<u8> {
    raw.trim().parse().ok()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.player_names, ["Player 1".to_string(), "Player 2".to_string()]);
        assert_eq!(config.format, FormatPreset::BestOfThree);
        assert_eq!(config.first_server, Player::One);
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn reads_match_settings() {
        let config = config_with(&[
            ("TENNIS_PLAYER1", "Ann"),
            ("TENNIS_PLAYER2", "Bo"),
            ("TENNIS_FORMAT", " 2 "),
            ("TENNIS_FIRST_SERVER", "2"),
            ("TENNIS_LOCATION", ""),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.player_names[1], "Bo");
        assert_eq!(config.format, FormatPreset::BestOfThreeMatchTiebreak);
        assert_eq!(config.first_server, Player::Two);
        assert_eq!(config.location, "");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_choices() {
        assert!(matches!(
            config_with(&[("TENNIS_FORMAT", "9")]),
            Err(ConfigError::InvalidValue { var: "TENNIS_FORMAT", .. })
        ));
        assert!(matches!(
            config_with(&[("TENNIS_FIRST_SERVER", "three")]),
            Err(ConfigError::InvalidValue { var: "TENNIS_FIRST_SERVER", .. })
        ));
    }
}
