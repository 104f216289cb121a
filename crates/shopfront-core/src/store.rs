//! # Store
//!
//! The aggregate root: owns the catalog (products) and the roster
//! (customers), and runs every operation that touches both.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add_product_to_member_cart(pid, cid)                                   │
//! │      ├── product unknown?  → ProductNotFound   (checked first)          │
//! │      ├── member unknown?   → MemberNotFound                             │
//! │      ├── stock == 0?       → OutOfStock                                 │
//! │      └── cart.push(pid)                                                 │
//! │                                                                         │
//! │  check_out_member(cid)                                                  │
//! │      ├── member unknown?   → InvalidCheckout   (nothing changes)        │
//! │      ├── for pid in cart (in order):                                    │
//! │      │     stock > 0  → subtotal += price, stock -= 1                   │
//! │      │     stock == 0 → skipped                                         │
//! │      ├── non-premium  → total = subtotal + subtotal × surcharge         │
//! │      └── cart emptied                                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is checked when an item is added but not reserved. Two adds of a
//! product with one unit left both succeed; the second unit is skipped at
//! checkout and shows up in [`CheckoutReceipt::skipped`].
//!
//! Lookups are linear scans. Registration does not deduplicate, so the
//! first-registered product or customer with a given id wins.

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;
use crate::types::{CartQuote, CheckoutReceipt};
use crate::validation::validate_search_query;

/// Catalog and roster for one store.
#[derive(Debug, Clone, Default)]
pub struct Store {
    product_list: Vec<Product>,
    customer_list: Vec<Customer>,
    config: StoreConfig,
}

impl Store {
    /// Creates an empty store with the default configuration.
    pub fn new() -> Self {
        Store::default()
    }

    /// Creates an empty store with the given configuration.
    ///
    /// ## Errors
    /// `CoreError::Validation` if the surcharge exceeds 100%.
    pub fn with_config(config: StoreConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Store {
            config,
            ..Store::default()
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Appends a product to the catalog. Duplicate ids are not rejected.
    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = %product.product_id(), "Registering product");
        self.product_list.push(product);
    }

    /// Appends a customer to the roster. Duplicate ids are not rejected.
    pub fn add_member(&mut self, customer: Customer) {
        debug!(account_id = %customer.account_id(), "Registering member");
        self.customer_list.push(customer);
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn get_product_from_id(&self, product_id: &str) -> Option<&Product> {
        self.product_list
            .iter()
            .find(|p| p.product_id() == product_id)
    }

    pub fn get_member_from_id(&self, account_id: &str) -> Option<&Customer> {
        self.customer_list
            .iter()
            .find(|c| c.account_id() == account_id)
    }

    fn product_mut(&mut self, product_id: &str) -> Option<&mut Product> {
        self.product_list
            .iter_mut()
            .find(|p| p.product_id() == product_id)
    }

    fn member_mut(&mut self, account_id: &str) -> Option<&mut Customer> {
        self.customer_list
            .iter_mut()
            .find(|c| c.account_id() == account_id)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.product_list.iter()
    }

    pub fn members(&self) -> impl Iterator<Item = &Customer> {
        self.customer_list.iter()
    }

    pub fn product_count(&self) -> usize {
        self.product_list.len()
    }

    pub fn member_count(&self) -> usize {
        self.customer_list.len()
    }

    /// Finds products whose title or description contains `query`,
    /// ignoring case.
    ///
    /// Returns matching product ids sorted ascending with duplicates removed.
    /// An empty query matches every product; a query longer than
    /// `StoreConfig::max_query_len` matches nothing.
    pub fn product_search(&self, query: &str) -> Vec<String> {
        if let Err(e) = validate_search_query(query, self.config.max_query_len) {
            warn!(error = %e, "Rejecting product search");
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut found: Vec<String> = self
            .product_list
            .iter()
            .filter(|p| p.matches(&needle))
            .map(|p| p.product_id().to_string())
            .collect();
        found.sort();
        found.dedup();

        debug!(query = %query, count = found.len(), "Search returned products");
        found
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Puts one unit of a product in a member's cart.
    ///
    /// Stock must be non-zero at call time but is not reserved; see the
    /// module docs.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the product id is unknown (checked first)
    /// - `MemberNotFound` if the account id is unknown
    /// - `OutOfStock` if the product has no units left
    pub fn add_product_to_member_cart(
        &mut self,
        product_id: &str,
        account_id: &str,
    ) -> CoreResult<()> {
        let in_stock = self
            .get_product_from_id(product_id)
            .map(Product::is_in_stock)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        let member = self
            .member_mut(account_id)
            .ok_or_else(|| CoreError::MemberNotFound(account_id.to_string()))?;

        if !in_stock {
            debug!(product_id = %product_id, "Product out of stock");
            return Err(CoreError::OutOfStock {
                product_id: product_id.to_string(),
            });
        }

        member.add_product_to_cart(product_id);
        debug!(
            product_id = %product_id,
            account_id = %account_id,
            cart_len = member.cart_len(),
            "Product added to cart"
        );
        Ok(())
    }

    /// Clears a member's cart without checking out.
    pub fn empty_member_cart(&mut self, account_id: &str) -> CoreResult<()> {
        let member = self
            .member_mut(account_id)
            .ok_or_else(|| CoreError::MemberNotFound(account_id.to_string()))?;
        member.empty_cart();
        debug!(account_id = %account_id, "Cart emptied");
        Ok(())
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    fn shipping_for(&self, subtotal: Money, premium: bool) -> Money {
        if premium {
            Money::zero()
        } else {
            subtotal.surcharge(self.config.shipping_surcharge)
        }
    }

    /// Prices what a checkout would charge right now, without changing
    /// stock or the cart.
    ///
    /// ## Errors
    /// - `MemberNotFound` if the account id is unknown
    /// - `AmountOverflow` if the total does not fit in `Money`
    pub fn quote_member_cart(&self, account_id: &str) -> CoreResult<CartQuote> {
        let member = self
            .get_member_from_id(account_id)
            .ok_or_else(|| CoreError::MemberNotFound(account_id.to_string()))?;
        self.price_cart(member)
    }

    fn price_cart(&self, member: &Customer) -> CoreResult<CartQuote> {
        let overflow = || CoreError::AmountOverflow {
            account_id: member.account_id().to_string(),
        };

        // Running stock per product, so repeated ids drain it like checkout would.
        let mut remaining: HashMap<&str, u32> = HashMap::new();
        let mut charged = Vec::new();
        let mut skipped = Vec::new();
        let mut subtotal = Money::zero();

        for product_id in member.cart() {
            let Some(product) = self.get_product_from_id(product_id) else {
                warn!(product_id = %product_id, "Cart item not in catalog");
                skipped.push(product_id.clone());
                continue;
            };
            let stock = remaining
                .entry(product.product_id())
                .or_insert_with(|| product.quantity_available());
            if *stock == 0 {
                debug!(product_id = %product_id, "Skipping item with no stock left");
                skipped.push(product_id.clone());
                continue;
            }
            *stock -= 1;
            subtotal = subtotal.checked_add(product.price()).ok_or_else(overflow)?;
            charged.push(product_id.clone());
        }

        let shipping = self.shipping_for(subtotal, member.is_premium_member());
        let total = subtotal.checked_add(shipping).ok_or_else(overflow)?;
        Ok(CartQuote {
            account_id: member.account_id().to_string(),
            charged,
            skipped,
            subtotal,
            shipping,
            total,
        })
    }

    /// Charges a member for their cart, removes the charged units from
    /// stock, and empties the cart.
    ///
    /// Items whose stock has already run out, or that are not in the
    /// catalog, are skipped (not charged, not decremented). Non-premium
    /// members pay the shipping surcharge on the subtotal, rounded half-up
    /// to the cent.
    ///
    /// ## Errors
    /// - `InvalidCheckout` if the account id is unknown
    /// - `AmountOverflow` if the total does not fit in `Money`
    ///
    /// The catalog and roster are left untouched on error.
    pub fn check_out_member(&mut self, account_id: &str) -> CoreResult<CheckoutReceipt> {
        let member = self.get_member_from_id(account_id).ok_or_else(|| {
            warn!(account_id = %account_id, "Checkout for unknown member");
            CoreError::InvalidCheckout {
                account_id: account_id.to_string(),
            }
        })?;
        let premium = member.is_premium_member();
        let quote = self.price_cart(member)?;

        // Pricing succeeded, so every charged id has a unit left to take.
        for product_id in &quote.charged {
            if let Some(product) = self.product_mut(product_id) {
                if let Err(e) = product.decrease_quantity() {
                    warn!(error = %e, "Stock changed between pricing and charging");
                }
            }
        }
        if let Some(member) = self.member_mut(account_id) {
            member.empty_cart();
        }

        let receipt = CheckoutReceipt {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.to_string(),
            premium,
            charged: quote.charged,
            skipped: quote.skipped,
            subtotal: quote.subtotal,
            shipping: quote.shipping,
            total: quote.total,
            completed_at: Utc::now(),
        };

        info!(
            receipt_id = %receipt.id,
            account_id = %account_id,
            items = receipt.charged.len(),
            skipped = receipt.skipped.len(),
            total = %receipt.total,
            "Checkout complete"
        );
        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
