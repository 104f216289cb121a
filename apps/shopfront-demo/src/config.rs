//! Demo configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                  | Default | Meaning                           |
//! |---------------------------|---------|-----------------------------------|
//! | `SHOPFRONT_SURCHARGE_BPS` | `700`   | Shipping surcharge, basis points  |
//! | `SHOPFRONT_MAX_QUERY_LEN` | `100`   | Longest accepted search query     |
//! | `SHOPFRONT_LOG`           | `info`  | Log filter (falls back to `RUST_LOG`) |

use serde::{Deserialize, Serialize};
use std::env;

use shopfront_core::config::DEFAULT_MAX_QUERY_LEN;
use shopfront_core::{StoreConfig, SurchargeRate};

/// Demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Settings handed to the store
    pub store: StoreConfig,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let surcharge_bps: u32 = lookup("SHOPFRONT_SURCHARGE_BPS")
            .unwrap_or_else(|| SurchargeRate::STANDARD_SHIPPING.bps().to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHOPFRONT_SURCHARGE_BPS".to_string()))?;

        let max_query_len: usize = lookup("SHOPFRONT_MAX_QUERY_LEN")
            .unwrap_or_else(|| DEFAULT_MAX_QUERY_LEN.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHOPFRONT_MAX_QUERY_LEN".to_string()))?;

        let log_filter = lookup("SHOPFRONT_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        let store = StoreConfig {
            shipping_surcharge: SurchargeRate::from_bps(surcharge_bps),
            max_query_len,
        };
        store
            .validate()
            .map_err(|e| ConfigError::OutOfRange("SHOPFRONT_SURCHARGE_BPS".to_string(), e.to_string()))?;

        Ok(DemoConfig { store, log_filter })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Value for {0} out of range: {1}")]
    OutOfRange(String, String),
}
