//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LM_SEED_FILE` - Path to a YAML catalog seed file (default: built-in
//!   sample catalog)
//! - `LM_DISCOUNT` - Flat checkout discount applied by `simulate`
//!   (default: 20)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Default flat checkout discount.
const DEFAULT_DISCOUNT: &str = "20";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Catalog seed file, if configured.
    pub seed_file: Option<PathBuf>,
    /// Flat checkout discount.
    pub discount: Decimal,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `LM_DISCOUNT` is set but not a valid
    /// decimal amount.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let seed_file = get_optional_env("LM_SEED_FILE").map(PathBuf::from);

        let raw_discount = get_env_or_default("LM_DISCOUNT", DEFAULT_DISCOUNT);
        let discount = Decimal::from_str(&raw_discount)
            .map_err(|e| ConfigError::InvalidEnvVar("LM_DISCOUNT".to_string(), e.to_string()))?;

        Ok(Self {
            seed_file,
            discount,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_discount_parses() {
        let discount = Decimal::from_str(DEFAULT_DISCOUNT).unwrap();
        assert_eq!(discount, Decimal::from(20));
    }
}
