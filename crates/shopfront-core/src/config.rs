//! Store configuration.
//!
//! Plain data; the binary decides where the values come from.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::SurchargeRate;
use crate::validation::validate_surcharge_bps;

/// Default limit on search query length, in characters.
pub const DEFAULT_MAX_QUERY_LEN: usize = 100;

/// Tunables for a [`Store`](crate::store::Store).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Shipping surcharge charged to non-premium members.
    pub shipping_surcharge: SurchargeRate,

    /// Queries longer than this match nothing.
    pub max_query_len: usize,
}

impl StoreConfig {
    /// Checks the values a caller may have set by hand.
    pub fn validate(&self) -> CoreResult<()> {
        validate_surcharge_bps(self.shipping_surcharge.bps())?;
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            shipping_surcharge: SurchargeRate::STANDARD_SHIPPING,
            max_query_len: DEFAULT_MAX_QUERY_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.shipping_surcharge.bps(), 700);
        assert_eq!(config.max_query_len, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_excessive_surcharge() {
        let config = StoreConfig {
            shipping_surcharge: SurchargeRate::from_bps(12_000),
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: StoreConfig = serde_json::from_str(r#"{"max_query_len": 20}"#).unwrap();
        assert_eq!(config.max_query_len, 20);
        assert_eq!(config.shipping_surcharge, SurchargeRate::STANDARD_SHIPPING);
    }
}
