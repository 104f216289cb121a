//! # Product
//!
//! An inventory record: identity, descriptive text, price and remaining stock.
//!
//! Everything except `quantity_available` is fixed at construction. Stock only
//! moves through [`Product::decrease_quantity`], which checkout calls once per
//! charged unit.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_price, validate_product_id, validate_title};

/// A product in the store catalog.
///
/// Deserialization goes through [`Product::new`], so a decoded product obeys
/// the same rules as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "ProductRecord")]
#[ts(export)]
pub struct Product {
    product_id: String,
    title: String,
    description: String,
    price: Money,
    quantity_available: u32,
}

/// Wire form of a [`Product`], before validation.
#[derive(Deserialize)]
struct ProductRecord {
    product_id: String,
    title: String,
    #[serde(default)]
    description: String,
    price: Money,
    quantity_available: u32,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CoreError;

    fn try_from(record: ProductRecord) -> CoreResult<Self> {
        Product::new(
            record.product_id,
            record.title,
            record.description,
            record.price,
            record.quantity_available,
        )
    }
}

impl Product {
    /// Builds a product after validating its fields.
    ///
    /// ## Errors
    /// `CoreError::Validation` when the id or title is blank, the title is
    /// too long, or the price is negative.
    pub fn new(
        product_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        quantity_available: u32,
    ) -> CoreResult<Self> {
        let product_id = product_id.into();
        let title = title.into();

        validate_product_id(&product_id)?;
        validate_title(&title)?;
        validate_price(price)?;

        Ok(Product {
            product_id,
            title,
            description: description.into(),
            price,
            quantity_available,
        })
    }

    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity_available(&self) -> u32 {
        self.quantity_available
    }

    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity_available > 0
    }

    /// Removes one unit from stock.
    ///
    /// ## Errors
    /// `CoreError::OutOfStock` if stock is already zero; stock is unchanged.
    pub fn decrease_quantity(&mut self) -> CoreResult<()> {
        match self.quantity_available.checked_sub(1) {
            Some(remaining) => {
                self.quantity_available = remaining;
                Ok(())
            }
            None => Err(CoreError::OutOfStock {
                product_id: self.product_id.clone(),
            }),
        }
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn rodent() -> Product {
        Product::new(
            "889",
            "Rodent of unusual size",
            "when a rodent of the usual size just won't do",
            Money::from_cents(3345),
            8,
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let product = rodent();
        assert_eq!(product.product_id(), "889");
        assert_eq!(product.title(), "Rodent of unusual size");
        assert_eq!(
            product.description(),
            "when a rodent of the usual size just won't do"
        );
        assert_eq!(product.price(), Money::from_cents(3345));
        assert_eq!(product.quantity_available(), 8);
        assert!(product.is_in_stock());
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        let err = Product::new("", "Toothbrush", "", Money::from_cents(350), 2).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Required {
                field: "product_id".to_string()
            })
        );

        assert!(Product::new("881", " ", "", Money::from_cents(350), 2).is_err());
        assert!(Product::new("881", "Toothbrush", "", Money::from_cents(-1), 2).is_err());
    }

    #[test]
    fn test_empty_description_allowed() {
        assert!(Product::new("881", "Toothbrush", "", Money::zero(), 0).is_ok());
    }

    #[test]
    fn test_decrease_quantity_n_times() {
        let mut product = rodent();
        for _ in 0..5 {
            product.decrease_quantity().unwrap();
        }
        assert_eq!(product.quantity_available(), 3);
    }

    #[test]
    fn test_decrease_quantity_at_zero_fails() {
        let mut product = Product::new("881", "Toothbrush", "", Money::from_cents(350), 1).unwrap();

        product.decrease_quantity().unwrap();
        assert!(!product.is_in_stock());

        let err = product.decrease_quantity().unwrap_err();
        assert_eq!(
            err,
            CoreError::OutOfStock {
                product_id: "881".to_string()
            }
        );
        assert_eq!(product.quantity_available(), 0);
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let json = r#"{"product_id":"","title":"Toothbrush","description":"","price":-500,"quantity_available":2}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("product_id is required"));

        let json = r#"{"product_id":"881","title":"Toothbrush","price":-500,"quantity_available":2}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_deserialize_accepts_serialized_product() {
        let product = rodent();
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(serde_json::from_str::<Product>(&json).unwrap(), product);
    }

    #[test]
    fn test_matches_title_or_description() {
        let product = rodent();
        assert!(product.matches("rodent"));
        assert!(product.matches("usual size"));
        assert!(product.matches("won't"));
        assert!(!product.matches("toothbrush"));
    }
}
