//! # Order Service
//!
//! Orchestrates Validator → Pricing → Store for every order operation.
//!
//! ## Thread Safety
//! The store is wrapped in a `Mutex` because:
//! 1. HTTP handlers run concurrently on the tokio runtime
//! 2. `next_id` followed by `add` must be atomic, or two creates race to the same id
//! 3. An update must not interleave with a delete of the same order
//!
//! The store never leaves the service: every read and write happens inside a
//! private lock helper, so an order can only change through `create_order`,
//! `update_order` or `delete_order`. Validation and pricing are pure and run
//! outside the lock for creates.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_order(req)   validate → price → lock { next_id, add }          │
//! │  update_order(id,req) lock { get_by_id → validate → price → update }   │
//! │  delete_order(id)    lock { remove }                                   │
//! │  quote(req)          validate → price                (no store access) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use goodburger_core::pricing::{self, PriceBreakdown};
use goodburger_core::validation::{validate_order, ValidatedOrder};
use goodburger_core::{Catalog, Order, OrderError, OrderId, OrderRequest, OrderResult};
use tracing::{debug, error, info, warn};

use crate::error::StoreError;
use crate::store::OrderStore;

/// Order operations over one catalog and one exclusively-owned store.
#[derive(Debug)]
pub struct OrderService {
    catalog: Catalog,
    store: Mutex<OrderStore>,
}

impl OrderService {
    /// Creates a service with an empty store.
    pub fn new(catalog: Catalog) -> Self {
        OrderService {
            catalog,
            store: Mutex::new(OrderStore::new()),
        }
    }

    #[cfg(test)]
    fn from_store(catalog: Catalog, store: OrderStore) -> Self {
        OrderService {
            catalog,
            store: Mutex::new(store),
        }
    }

    /// The menu this service validates against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Validates, prices and stores a new order.
    pub fn create_order(&self, request: &OrderRequest) -> OrderResult<Order> {
        let validated = self.validate(request)?;
        let breakdown = pricing::price(validated.sandwich, &validated.extras);

        let order = self.lock_store(|store| {
            let id = store
                .next_id()
                .map_err(|err| inconsistency(OrderId::MAX, err))?;
            let order = Order::new(id, &validated, &breakdown, Utc::now());
            store
                .add(order.clone())
                .map_err(|err| inconsistency(order.id, err))?;
            Ok(order)
        })?;

        info!(
            order_id = order.id,
            sandwich_id = order.sandwich_id,
            extras = ?order.extra_ids,
            subtotal = %order.subtotal(),
            discount = %order.discount_rate(),
            total = %order.total(),
            "Order created"
        );
        Ok(order)
    }

    /// Re-validates and re-prices an existing order from scratch.
    ///
    /// `id` and `created_at` are kept; everything else is replaced. On any
    /// failure the stored order is left as it was.
    pub fn update_order(&self, id: OrderId, request: &OrderRequest) -> OrderResult<Order> {
        let order = self.lock_store(|store| {
            let mut order = store
                .get_by_id(id)
                .cloned()
                .ok_or(OrderError::OrderNotFound(id))?;

            let validated = self.validate(request)?;
            let breakdown = pricing::price(validated.sandwich, &validated.extras);
            order.reprice(&validated, &breakdown);

            store
                .update(order.clone())
                .map_err(|err| inconsistency(id, err))?;
            Ok(order)
        })?;

        info!(
            order_id = order.id,
            sandwich_id = order.sandwich_id,
            extras = ?order.extra_ids,
            subtotal = %order.subtotal(),
            discount = %order.discount_rate(),
            total = %order.total(),
            "Order updated"
        );
        Ok(order)
    }

    /// Removes an order.
    pub fn delete_order(&self, id: OrderId) -> OrderResult<()> {
        self.lock_store(|store| match store.remove(id) {
            Ok(_) => Ok(()),
            Err(StoreError::NotFound(_)) => Err(OrderError::OrderNotFound(id)),
            Err(err) => Err(inconsistency(id, err)),
        })?;

        info!(order_id = id, "Order deleted");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Prices a request without storing anything.
    pub fn quote(&self, request: &OrderRequest) -> OrderResult<PriceBreakdown> {
        let validated = self.validate(request)?;
        Ok(pricing::price(validated.sandwich, &validated.extras))
    }

    pub fn get_order(&self, id: OrderId) -> OrderResult<Order> {
        debug!(order_id = id, "Fetching order");
        self.with_store(|store| store.get_by_id(id).cloned())
            .ok_or(OrderError::OrderNotFound(id))
    }

    /// All orders, in id order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.with_store(OrderStore::get_all)
    }

    /// Number of stored orders.
    pub fn order_count(&self) -> usize {
        self.with_store(OrderStore::len)
    }

    // =========================================================================
    // Store Access
    // =========================================================================

    /// Executes a function with read access to the store.
    fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderStore) -> R,
    {
        let store = self.guard();
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// The lock is held for the whole closure, which makes it one critical
    /// section with respect to every other store access.
    fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderStore) -> R,
    {
        let mut store = self.guard();
        f(&mut store)
    }

    fn lock_store<F, T>(&self, f: F) -> OrderResult<T>
    where
        F: FnOnce(&mut OrderStore) -> OrderResult<T>,
    {
        self.with_store_mut(f)
    }

    fn guard(&self) -> MutexGuard<'_, OrderStore> {
        // Store methods never panic halfway through a mutation, so the data
        // behind a poisoned lock is still consistent.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn validate<'a>(&'a self, request: &OrderRequest) -> OrderResult<ValidatedOrder<'a>> {
        validate_order(request, &self.catalog).map_err(|err| {
            warn!(
                code = err.code(),
                sandwich_id = request.sandwich_id,
                extras = ?request.extra_ids,
                "Order rejected: {}",
                err
            );
            err
        })
    }
}

fn inconsistency(id: OrderId, err: StoreError) -> OrderError {
    error!(order_id = id, error = %err, "Order store rejected an expected mutation");
    OrderError::InternalInconsistency(format!("order {id}: {err}"))
}

// =============================================================================
// Unit Tests
// =============================================================================
