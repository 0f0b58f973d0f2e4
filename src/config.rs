//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_core::GameMode;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mode of the first game.
    #[serde(default)]
    mode: GameMode,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for the computer's random fallback. Unset seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Where tracing output goes while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer_delay_ms: default_delay_ms(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(mode = %config.mode, delay_ms = config.computer_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(delay_ms) = delay_ms {
            self.computer_delay_ms = delay_ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// The computer delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
    /// Creates a new configuration error at the caller's location.
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

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").expect("valid TOML");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = AppConfig::from_toml("mode = \"vs-computer\"\nseed = 1")
            .expect("valid TOML")
            .with_overrides(Some(GameMode::TwoPlayer), Some(0), None);
        assert_eq!(*config.mode(), GameMode::TwoPlayer);
        assert_eq!(*config.computer_delay_ms(), 0);
        assert_eq!(*config.seed(), Some(1));
    }

    #[test]
    fn test_unknown_mode_is_error() {
        let err = AppConfig::from_toml("mode = \"pvc\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
