//! # Shopfront Demo
//!
//! Seeds a small catalog, puts two products in a member's cart, checks the
//! member out and prints the receipt as JSON.
//!
//! ## Usage
//! ```bash
//! cargo run -p shopfront-demo
//!
//! # 10% shipping instead of 7%, with debug logs
//! SHOPFRONT_SURCHARGE_BPS=1000 SHOPFRONT_LOG=debug cargo run -p shopfront-demo
//! ```

mod config;
mod error;

use std::process::ExitCode;

use shopfront_core::{CartStatus, CheckoutReceipt, CoreError, Customer, Money, Product, Store};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::error::AppError;

/// Member checked out by the demo.
const DEMO_ACCOUNT: &str = "QWF";

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Demo failed");
            eprintln!("shopfront-demo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), AppError> {
    let config = DemoConfig::load()?;
    init_tracing(&config.log_filter)?;

    info!(
        surcharge_bps = config.store.shipping_surcharge.bps(),
        max_query_len = config.store.max_query_len,
        "Configuration loaded"
    );

    let mut store = seed_store(&config)?;
    match checkout(&mut store, DEMO_ACCOUNT) {
        Ok(receipt) => {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
            Ok(())
        }
        Err(CoreError::InvalidCheckout { account_id }) => {
            error!(
                account_id = %account_id,
                "The customer ID does not match any current customer, please try again"
            );
            Err(CoreError::InvalidCheckout { account_id }.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn init_tracing(filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::LogFilter(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
    Ok(())
}

/// Builds the sample store: two products and one non-premium member.
fn seed_store(config: &DemoConfig) -> Result<Store, AppError> {
    let mut store = Store::with_config(config.store)?;

    store.add_product(Product::new(
        "889",
        "Rodent of unusual size",
        "when a rodent of the usual size just won't do",
        Money::from_cents(3345),
        8,
    )?);
    store.add_product(Product::new(
        "881",
        "Toothbrush",
        "Used for brushing teeth",
        Money::from_cents(350),
        2,
    )?);
    store.add_member(Customer::new("Yinsheng", DEMO_ACCOUNT, false)?);

    info!(
        products = store.product_count(),
        members = store.member_count(),
        "Store seeded"
    );
    Ok(store)
}

/// Adds every catalog product to the member's cart, then checks out.
fn checkout(store: &mut Store, account_id: &str) -> Result<CheckoutReceipt, CoreError> {
    let product_ids: Vec<String> = store
        .products()
        .map(|p| p.product_id().to_string())
        .collect();

    for product_id in &product_ids {
        let result = store.add_product_to_member_cart(product_id, account_id);
        info!(
            product_id = %product_id,
            status = %CartStatus::from(&result),
            "Add to cart"
        );
    }

    store.check_out_member(account_id)
}
