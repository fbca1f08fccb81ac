//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PLAINWEAR_CATALOG` - Path to a JSON catalog file; the compiled-in
//!   fixture is used when unset
//! - `PLAINWEAR_SETTLEMENT_DELAY_MS` - Simulated settlement delay in
//!   milliseconds (default: 2000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::checkout::FixedDelaySettlement;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path to a JSON catalog file; `None` means the built-in fixture.
    pub catalog_path: Option<PathBuf>,
    /// Simulated settlement delay.
    pub settlement_delay: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if the settlement delay is
    /// set but not a number of milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog_path = std::env::var("PLAINWEAR_CATALOG").ok().map(PathBuf::from);

        let settlement_delay = match std::env::var("PLAINWEAR_SETTLEMENT_DELAY_MS") {
            Ok(value) => {
                let millis: u64 = value.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "PLAINWEAR_SETTLEMENT_DELAY_MS".to_owned(),
                        format!("expected milliseconds, got {value:?}"),
                    )
                })?;
                Duration::from_millis(millis)
            }
            Err(_) => FixedDelaySettlement::DEFAULT_DELAY,
        };

        Ok(Self {
            catalog_path,
            settlement_delay,
        })
    }

    /// Build the settlement gateway this configuration describes.
    #[must_use]
    pub const fn settlement_gateway(&self) -> FixedDelaySettlement {
        FixedDelaySettlement::new(self.settlement_delay)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            settlement_delay: FixedDelaySettlement::DEFAULT_DELAY,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.settlement_delay, Duration::from_secs(2));
    }
}
