//! # Validation Module
//!
//! Field checks run when products and customers are constructed, and when a
//! `StoreConfig` is loaded. Registration itself (`Store::add_product`,
//! `Store::add_member`) does not validate again and does not deduplicate.
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_product_id, validate_price};
//! use shopfront_core::Money;
//!
//! assert!(validate_product_id("889").is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product title accepted.
pub const MAX_TITLE_LEN: usize = 200;

/// Highest surcharge accepted (100%).
pub const MAX_SURCHARGE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Product ids are opaque but must not be blank.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    require("product_id", id)
}

/// Account ids are opaque but must not be blank.
pub fn validate_account_id(id: &str) -> ValidationResult<()> {
    require("account_id", id)
}

pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    require("name", name)
}

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_TITLE_LEN`] characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    require("title", title)?;

    if title.trim().chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a search query against a length limit.
///
/// Empty queries are allowed; they match every product.
pub fn validate_search_query(query: &str, max_len: usize) -> ValidationResult<()> {
    if query.chars().count() > max_len {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: max_len,
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Prices must be non-negative. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Surcharge rates must lie in 0..=10000 bps.
pub fn validate_surcharge_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_SURCHARGE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "surcharge_bps".to_string(),
            min: 0,
            max: MAX_SURCHARGE_BPS as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ids() {
        assert!(validate_product_id("889").is_ok());
        assert!(validate_account_id("QWF").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_account_id("   ").is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Rodent of unusual size").is_ok());
        assert!(validate_title("").is_err());
        assert_eq!(
            validate_title(&"A".repeat(MAX_TITLE_LEN + 1)),
            Err(ValidationError::TooLong {
                field: "title".to_string(),
                max: MAX_TITLE_LEN,
            })
        );
        assert!(validate_title(&"A".repeat(MAX_TITLE_LEN)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(3345)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert!(validate_search_query("", 100).is_ok());
        assert!(validate_search_query("tooth", 100).is_ok());
        assert!(validate_search_query(&"x".repeat(101), 100).is_err());
    }

    #[test]
    fn test_validate_surcharge_bps() {
        assert!(validate_surcharge_bps(0).is_ok());
        assert!(validate_surcharge_bps(700).is_ok());
        assert!(validate_surcharge_bps(10_000).is_ok());
        assert!(validate_surcharge_bps(10_001).is_err());
    }
}
