//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::GameSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Top-level configuration file.
///
/// ```toml
/// [game]
/// mode = "player-vs-ai"
/// difficulty = "hard"
///
/// [tui]
/// ai_delay_ms = 500
/// log_file = "noughts.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Settings for new games.
    game: GameSettings,
    /// Terminal front end settings.
    tui: TuiConfig,
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Pause before the computer's move is shown. Zero plays it at once.
    ai_delay_ms: u64,
    /// File receiving log output while the terminal is in raw mode.
    log_file: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 500,
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl AppConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(mode = %config.game.mode(), difficulty = %config.game.difficulty(), "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the game settings.
    pub fn with_game(mut self, game: GameSettings) -> Self {
        self.game = game;
        self
    }

    /// Overrides the computer's move delay.
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: u64) -> Self {
        self.tui.ai_delay_ms = ai_delay_ms;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Difficulty, Mode};

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(*config.tui().ai_delay_ms(), 500);
    }

    #[test]
    fn test_partial_tables() {
        let config = AppConfig::from_toml(
            r#"
            [game]
            mode = "player-vs-player"
            seed = 7

            [tui]
            ai_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(*config.game().mode(), Mode::PlayerVsPlayer);
        assert_eq!(*config.game().difficulty(), Difficulty::Hard);
        assert_eq!(*config.game().seed(), Some(7));
        assert_eq!(*config.tui().ai_delay_ms(), 0);
        assert_eq!(config.tui().log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_bad_value_is_error() {
        let err = AppConfig::from_toml("[game]\ndifficulty = \"impossible\"\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
