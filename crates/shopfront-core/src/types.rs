//! # Domain Types
//!
//! Value types shared by the store operations.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ SurchargeRate   │   │ CheckoutReceipt │   │   CartQuote     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  id (UUID)      │   │  subtotal       │       │
//! │  │  700 = 7%       │   │  subtotal       │   │  shipping       │       │
//! │  └─────────────────┘   │  shipping       │   │  total          │       │
//! │                        │  total          │   └─────────────────┘       │
//! │  ┌─────────────────┐   │  charged/skipped│                             │
//! │  │  CartStatus     │   └─────────────────┘                             │
//! │  │  Added          │                                                    │
//! │  │  ProductNotFound│                                                    │
//! │  │  MemberNotFound │                                                    │
//! │  │  OutOfStock     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Surcharge Rate
// =============================================================================

/// A percentage in basis points (1 bps = 0.01%).
///
/// Used for the shipping surcharge charged to non-premium members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurchargeRate(u32);

impl SurchargeRate {
    /// Standard shipping surcharge for non-premium members (7%).
    pub const STANDARD_SHIPPING: SurchargeRate = SurchargeRate(700);

    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        SurchargeRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        SurchargeRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for SurchargeRate {
    fn default() -> Self {
        SurchargeRate::STANDARD_SHIPPING
    }
}

// =============================================================================
// Cart Status
// =============================================================================

/// Outcome of an add-to-cart request in message form.
///
/// `Store::add_product_to_member_cart` returns a `CoreResult<()>`; this enum
/// is the flattened view of that result for callers that display a status
/// line instead of handling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    Added,
    ProductNotFound,
    MemberNotFound,
    OutOfStock,
    Rejected,
}

impl CartStatus {
    pub fn message(&self) -> &'static str {
        match self {
            CartStatus::Added => "product added to cart",
            CartStatus::ProductNotFound => "product ID not found",
            CartStatus::MemberNotFound => "member ID not found",
            CartStatus::OutOfStock => "product out of stock",
            CartStatus::Rejected => "request rejected",
        }
    }
}

impl fmt::Display for CartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<&CoreResult<()>> for CartStatus {
    fn from(result: &CoreResult<()>) -> Self {
        match result {
            Ok(()) => CartStatus::Added,
            Err(CoreError::ProductNotFound(_)) => CartStatus::ProductNotFound,
            Err(CoreError::MemberNotFound(_)) => CartStatus::MemberNotFound,
            Err(CoreError::OutOfStock { .. }) => CartStatus::OutOfStock,
            Err(CoreError::InvalidCheckout { .. })
            | Err(CoreError::AmountOverflow { .. })
            | Err(CoreError::Validation(_)) => CartStatus::Rejected,
        }
    }
}

// =============================================================================
// Checkout Receipt
// =============================================================================

/// The result of a completed checkout.
///
/// `charged` and `skipped` list product ids in cart order. A product id is
/// skipped when its stock had already run out by the time checkout reached
/// it (or it is no longer in the catalog); skipped items are neither priced
/// nor decremented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutReceipt {
    /// Receipt id (UUID v4).
    pub id: String,
    pub account_id: String,
    pub premium: bool,
    pub charged: Vec<String>,
    pub skipped: Vec<String>,
    /// Sum of charged prices.
    pub subtotal: Money,
    /// Shipping surcharge; zero for premium members.
    pub shipping: Money,
    /// `subtotal + shipping`.
    pub total: Money,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Cart Quote
// =============================================================================

/// A checkout preview: what a checkout would charge right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartQuote {
    pub account_id: String,
    pub charged: Vec<String>,
    pub skipped: Vec<String>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
