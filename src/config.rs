//! Solver configuration
//!
//! Load settings from a TOML file; every field is optional and falls back to
//! its default.
//!
//! # Examples
//!
//! ```
//! use wordle_solver::config::SolverConfig;
//! use wordle_solver::solver::StrategyKind;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     strategy = "max_entropy"
//!     tolerance = 0.25
//!     max_rounds = 8
//!     random_seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, StrategyKind::MaxEntropy);
//! assert_eq!(config.max_rounds, Some(8));
//! assert_eq!(config.random_seed, Some(42));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::solver::{DEFAULT_TOLERANCE, StrategyKind, StrategyType};

/// Rounds allowed in a standard game
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Guess selection strategy
    pub strategy: StrategyKind,

    /// Width of the near-top band in bits
    pub tolerance: f64,

    /// Round cap; `None` plays until solved
    pub max_rounds: Option<usize>,

    /// Random seed for reproducible runs
    pub random_seed: Option<u64>,

    /// Precomputed opening table (JSON)
    pub opening_table: Option<PathBuf>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            tolerance: DEFAULT_TOLERANCE,
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
            random_seed: None,
            opening_table: None,
        }
    }
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error on invalid TOML or invalid values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for a negative or non-finite tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be a non-negative number of bits, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Strategy described by this configuration
    #[must_use]
    pub const fn build_strategy(&self) -> StrategyType {
        StrategyType::from_kind(self.strategy, self.tolerance)
    }
}
