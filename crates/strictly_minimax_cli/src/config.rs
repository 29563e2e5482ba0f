//! Runner configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Player;
use tracing::{debug, info, instrument};

/// Configuration for the terminal runner.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Mark the human plays in interactive games.
    #[serde(default = "default_human")]
    human: Player,

    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "strictly_minimax=debug").
    #[serde(default = "default_log_level")]
    log_level: String,

    /// Print the number of boards searched after each engine move.
    #[serde(default)]
    show_stats: bool,
}

fn default_human() -> Player {
    Player::O
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            log_level: default_log_level(),
            show_stats: false,
        }
    }
}

impl RunnerConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the human's mark when a command-line flag supplied one.
    #[must_use]
    pub fn with_human(mut self, human: Option<Player>) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self
    }

    /// Overrides whether search statistics are printed.
    #[must_use]
    pub fn with_show_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = self.show_stats || show_stats;
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
