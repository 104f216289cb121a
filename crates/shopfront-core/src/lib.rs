//! # shopfront-core: Store Simulation Logic
//!
//! An in-memory store: a catalog of products, a roster of customers, carts,
//! and a checkout that charges a flat shipping surcharge to non-premium
//! members.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                shopfront-demo (binary)                          │   │
//! │  │    env config ──► tracing ──► seed catalog ──► checkout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopfront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │ customer  │  │   store   │  │   money   │  │   │
//! │  │   │  Product  │  │ Customer  │  │   Store   │  │   Money   │  │   │
//! │  │   │  stock    │  │  cart     │  │ checkout  │  │ surcharge │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] / [`customer`] - The two entity types
//! - [`store`] - Catalog, roster, cart operations and checkout
//! - [`shared`] - Mutex-guarded store handle for multi-threaded callers
//! - [`money`] - Integer-cents money type
//! - [`types`] - Surcharge rate, receipts, quotes, cart status
//! - [`config`] - Store tunables
//! - [`error`] / [`validation`] - Typed errors and field checks
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Customer, Money, Product, Store};
//!
//! let mut store = Store::new();
//! store.add_product(Product::new("881", "Toothbrush", "Used for brushing teeth",
//!     Money::from_cents(350), 2)?);
//! store.add_member(Customer::new("Yinsheng", "QWF", false)?);
//!
//! store.add_product_to_member_cart("881", "QWF")?;
//! let receipt = store.check_out_member("QWF")?;
//!
//! // $3.50 plus 7% shipping ($0.245, rounded to $0.25)
//! assert_eq!(receipt.total.cents(), 375);
//! # Ok::<(), shopfront_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod shared;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::StoreConfig;
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::Product;
pub use shared::SharedStore;
pub use store::Store;
pub use types::*;
