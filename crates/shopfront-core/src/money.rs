//! # Money Module
//!
//! Provides the `Money` type used for prices, subtotals and checkout totals.
//!
//! ## Integer Cents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are stored as whole cents (i64).                                │
//! │                                                                         │
//! │    $33.45 + $3.50  =  3345 + 350  =  3695 cents                         │
//! │    7% shipping     =  (3695 × 700 + 5000) / 10000  =  259 cents         │
//! │    total           =  3954 cents  =  $39.54                             │
//! │                                                                         │
//! │  Sub-cent results are rounded half-up exactly once, when the            │
//! │  surcharge is computed. Sums of prices never round.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let toothbrush = Money::from_major_minor(3, 50);
//! let rodent = Money::from_cents(3345);
//!
//! let subtotal = toothbrush + rodent;
//! assert_eq!(subtotal.cents(), 3695);
//! assert_eq!(subtotal.to_string(), "$36.95");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::types::SurchargeRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► checkout subtotal ──► surcharge ──► CheckoutReceipt.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 0).cents(), 1000);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// For negative amounts only the major unit carries the sign.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(100).checked_add(Money::from_cents(50)), Some(Money::from_cents(150)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Computes `self × rate`, rounded half-up to the nearest cent.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    /// use shopfront_core::types::SurchargeRate;
    ///
    /// // $3.50 × 7% = $0.245 → $0.25
    /// let shipping = Money::from_cents(350).surcharge(SurchargeRate::from_bps(700));
    /// assert_eq!(shipping.cents(), 25);
    /// ```
    pub fn surcharge(&self, rate: SurchargeRate) -> Money {
        // i128 so large carts cannot overflow the intermediate product
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as `$10.99` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
