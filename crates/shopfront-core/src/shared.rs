//! # Shared Store
//!
//! `Store` has no internal locking. Callers that serve more than one thread
//! wrap it in a [`SharedStore`], which serializes every operation behind one
//! mutex.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  thread A: add_product_to_member_cart ──┐                               │
//! │                                         ├──► Mutex<Store> ──► one at    │
//! │  thread B: check_out_member ────────────┘                     a time    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Holding the lock for the whole checkout keeps the stock check and the
//! decrement atomic with respect to concurrent add-to-cart calls.

use std::sync::{Arc, Mutex, PoisonError};

use crate::store::Store;

/// A cloneable, thread-safe handle to one [`Store`].
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    store: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        SharedStore {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with read access to the store.
    ///
    /// ```rust
    /// use shopfront_core::{SharedStore, Store};
    ///
    /// let shared = SharedStore::new(Store::new());
    /// assert_eq!(shared.with_store(|s| s.product_count()), 0);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        // Each mutation is a single push, clear or decrement, so a poisoned
        // store is still consistent.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Runs `f` with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        SharedStore::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Customer, Money, Product};
    use std::thread;

    #[test]
    fn test_concurrent_checkouts_never_oversell() {
        let mut store = Store::new();
        store.add_product(Product::new("P1", "Widget", "", Money::from_cents(100), 5).unwrap());
        for i in 0..8 {
            let id = format!("C{}", i);
            store.add_member(Customer::new(format!("Member {}", i), id.as_str(), false).unwrap());
        }
        let shared = SharedStore::new(store);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let id = format!("C{}", i);
                    shared.with_store_mut(|s| {
                        // Stock is checked at add time only; checkout decides.
                        let _ = s.add_product_to_member_cart("P1", &id);
                    });
                    shared.with_store_mut(|s| s.check_out_member(&id).unwrap())
                })
            })
            .collect();

        let charged: usize = handles
            .into_iter()
            .map(|h| h.join().unwrap().charged.len())
            .sum();

        assert_eq!(charged, 5);
        assert_eq!(
            shared.with_store(|s| s.get_product_from_id("P1").unwrap().quantity_available()),
            0
        );
    }
}
