//! # Customer
//!
//! A store account with a display name, a premium flag and a cart.
//!
//! The cart is an ordered list of product ids. Duplicates are allowed: adding
//! the same product twice means two units. Ids are not checked against the
//! catalog here; `Store` does that before calling
//! [`Customer::add_product_to_cart`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_account_id, validate_customer_name};

/// A registered store member.
///
/// Deserialization goes through [`Customer::new`]; cart ids are restored
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "CustomerRecord")]
#[ts(export)]
pub struct Customer {
    name: String,
    account_id: String,
    premium: bool,
    cart: Vec<String>,
}

/// Wire form of a [`Customer`], before validation.
#[derive(Deserialize)]
struct CustomerRecord {
    name: String,
    account_id: String,
    premium: bool,
    #[serde(default)]
    cart: Vec<String>,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = CoreError;

    fn try_from(record: CustomerRecord) -> CoreResult<Self> {
        let mut customer = Customer::new(record.name, record.account_id, record.premium)?;
        customer.cart = record.cart;
        Ok(customer)
    }
}

impl Customer {
    /// Builds a customer with an empty cart.
    ///
    /// ## Errors
    /// `CoreError::Validation` when the name or account id is blank.
    pub fn new(
        name: impl Into<String>,
        account_id: impl Into<String>,
        premium: bool,
    ) -> CoreResult<Self> {
        let name = name.into();
        let account_id = account_id.into();

        validate_customer_name(&name)?;
        validate_account_id(&account_id)?;

        Ok(Customer {
            name,
            account_id,
            premium,
            cart: Vec::new(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Product ids in the order they were added.
    #[inline]
    pub fn cart(&self) -> &[String] {
        &self.cart
    }

    /// Premium members ship for free.
    #[inline]
    pub fn is_premium_member(&self) -> bool {
        self.premium
    }

    pub fn add_product_to_cart(&mut self, product_id: impl Into<String>) {
        self.cart.push(product_id.into());
    }

    pub fn empty_cart(&mut self) {
        self.cart.clear();
    }

    #[inline]
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    #[inline]
    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
