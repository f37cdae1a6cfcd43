//! Exchange configuration from environment variables.

use crate::domain::{
    CodeGenerator, OfferPolicy, DEFAULT_CODE_LENGTH, DEFAULT_CODE_PREFIX, DEFAULT_MAX_CODE_ATTEMPTS,
};
use std::env;
use thiserror::Error;

/// Longest accepted code suffix.
pub const MAX_CODE_LENGTH: usize = 32;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Code length must be at least 1")]
    ZeroCodeLength,

    #[error("Code length {length} exceeds the maximum of {max}")]
    CodeLengthTooLarge { length: usize, max: usize },

    #[error("Code prefix must be ASCII without whitespace: {0:?}")]
    InvalidPrefix(String),

    #[error("Max code attempts must be at least 1")]
    ZeroAttempts,
}

/// Configuration for the exchange service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Namespace prefix of every code
    pub code_prefix: String,

    /// Random suffix length
    pub code_length: usize,

    /// Draws per offer before reporting `CodeSpaceExhausted`
    pub max_code_attempts: u32,

    /// Whether offering removes the pin from the source inventory
    pub offer_policy: OfferPolicy,

    /// Whether new sessions start with one random catalog pin
    pub seed_new_inventories: bool,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            code_prefix: DEFAULT_CODE_PREFIX.to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
            offer_policy: OfferPolicy::RetainPin,
            seed_new_inventories: true,
        }
    }
}

impl ExchangeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PX_CODE_PREFIX`: Code prefix (default: EXPO-)
    /// - `PX_CODE_LENGTH`: Suffix length (default: 5)
    /// - `PX_MAX_CODE_ATTEMPTS`: Draws per offer (default: 64)
    /// - `PX_OFFER_POLICY`: `retain` or `remove` (default: retain)
    /// - `PX_SEED_INVENTORY`: Seed new sessions with a random pin (default: true)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from any key lookup, with the same variable
    /// names and fallbacks as `from_env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            code_prefix: lookup("PX_CODE_PREFIX").unwrap_or(defaults.code_prefix),

            code_length: lookup("PX_CODE_LENGTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_length),

            max_code_attempts: lookup("PX_MAX_CODE_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_code_attempts),

            offer_policy: lookup("PX_OFFER_POLICY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.offer_policy),

            seed_new_inventories: lookup("PX_SEED_INVENTORY")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.seed_new_inventories),
        }
    }

    /// Creates a config for tests: empty inventories, small attempt budget.
    pub fn for_testing() -> Self {
        Self {
            max_code_attempts: 8,
            seed_new_inventories: false,
            ..Default::default()
        }
    }

    /// Checks the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if self.code_length > MAX_CODE_LENGTH {
            return Err(ConfigError::CodeLengthTooLarge {
                length: self.code_length,
                max: MAX_CODE_LENGTH,
            });
        }
        if !self.code_prefix.is_ascii() || self.code_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidPrefix(self.code_prefix.clone()));
        }
        if self.max_code_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }

    /// Code generator for this configuration.
    pub fn code_generator(&self) -> CodeGenerator {
        CodeGenerator::new(self.code_prefix.clone(), self.code_length)
    }
}
