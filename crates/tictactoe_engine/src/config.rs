//! Search configuration.

use crate::search::Strategy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the first move of a game is chosen.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OpeningPolicy {
    /// Search the empty board like any other.
    #[default]
    Search,
    /// Pick a uniformly random cell on the empty board.
    ///
    /// Every opening draws under perfect play, so this only adds variety.
    Random,
}

/// Configuration for an [`Engine`](crate::Engine).
///
/// ```toml
/// strategy = "alpha-beta"   # or "exhaustive"
/// opening = "search"        # or "random"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search used to pick moves.
    strategy: Strategy,

    /// Policy for the opening move.
    opening: OpeningPolicy,
}

impl SearchConfig {
    /// Creates a configuration.
    pub fn new(strategy: Strategy, opening: OpeningPolicy) -> Self {
        Self { strategy, opening }
    }

    /// Replaces the search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replaces the opening policy.
    pub fn with_opening(mut self, opening: OpeningPolicy) -> Self {
        self.opening = opening;
        self
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(strategy = %config.strategy, opening = %config.opening, "Config loaded");
        Ok(config)
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
