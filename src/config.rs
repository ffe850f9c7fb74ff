//! Engine configuration
//!
//! Loads settings from environment variables. All settings have defaults,
//! so an empty environment yields [`EngineConfig::default`].

use std::env;

use crate::types::Amount;

/// Dust threshold: 0.01 currency units
pub const DEFAULT_EPSILON: Amount = Amount::from_raw(1_000_000);

/// Settlement engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Transfers at or below this amount are not emitted, and a remaining
    /// balance within this distance of zero counts as settled
    pub epsilon: Amount,

    /// Log a warning when the input balances do not sum to zero
    pub warn_on_imbalance: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            warn_on_imbalance: true,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// - `SETTLE_EPSILON`: decimal, must be positive (default `0.01`)
    /// - `SETTLE_WARN_ON_IMBALANCE`: `true`/`false` (default `true`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let epsilon = match lookup("SETTLE_EPSILON") {
            Some(raw) => raw
                .parse::<Amount>()
                .ok()
                .filter(|eps| eps.is_positive())
                .ok_or(ConfigError::InvalidValue("SETTLE_EPSILON"))?,
            None => defaults.epsilon,
        };

        let warn_on_imbalance = match lookup("SETTLE_WARN_ON_IMBALANCE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SETTLE_WARN_ON_IMBALANCE"))?,
            None => defaults.warn_on_imbalance,
        };

        Ok(Self {
            epsilon,
            warn_on_imbalance,
        })
    }

    /// Replace the dust threshold
    pub fn with_epsilon(mut self, epsilon: Amount) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
