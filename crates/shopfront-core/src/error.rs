//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Lookup, stock and checkout failures            │
//! │  └── ValidationError  - Bad input when building products/customers     │
//! │                                                                         │
//! │  shopfront-demo errors (binary)                                        │
//! │  ├── ConfigError      - Environment parsing failures                   │
//! │  └── AppError         - Anything the demo run can fail with            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Absence vs. Failure
//! Plain lookups (`Store::get_product_from_id`) return `Option`: a missing id
//! is an expected answer there. Operations that *need* the entity
//! (add-to-cart, checkout) return `CoreResult` and name the id that failed.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product in the catalog carries this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No customer in the roster carries this account id.
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// The product exists but has no units left.
    ///
    /// ## When This Occurs
    /// - Adding a product whose `quantity_available` is 0 to a cart
    /// - Decrementing stock that is already at 0
    #[error("Product out of stock: {product_id}")]
    OutOfStock { product_id: String },

    /// Checkout was requested for an account id the store does not know.
    ///
    /// Nothing is charged and no stock moves when this is returned.
    #[error("Invalid checkout: no member with account id {account_id}")]
    InvalidCheckout { account_id: String },

    /// A cart total does not fit in `Money`.
    ///
    /// Checkout prices the whole cart before touching stock, so nothing
    /// changes when this is returned.
    #[error("Amount overflow while pricing cart for {account_id}")]
    AmountOverflow { account_id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for the two "unknown id" variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::ProductNotFound(_) | CoreError::MemberNotFound(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
