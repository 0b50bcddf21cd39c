//! # Order Store
//!
//! Id-indexed in-memory collection of orders.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BTreeMap<OrderId, Order>                                               │
//! │                                                                         │
//! │   1 ──► Order { X Burger + Fries }                                      │
//! │   2 ──► Order { X Bacon }                                               │
//! │   5 ──► Order { X Egg + Soft drink }     ◄── last key = current max     │
//! │                                                                         │
//! │  next_id() = max + 1 = 6   (no scan: the map is ordered)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are handed out past the current maximum, so id order and insertion
//! order coincide and `get_all` is stable.
//!
//! The store itself is not synchronized. [`crate::OrderService`] owns it
//! behind a single mutex so `next_id` + `add` form one critical section.

use std::collections::BTreeMap;

use goodburger_core::{Order, OrderId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Exclusive owner of the persisted orders.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: BTreeMap<OrderId, Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        OrderStore::default()
    }

    /// One greater than the largest stored id, or 1 when empty.
    ///
    /// Only unique while the caller holds exclusive access until `add`.
    pub fn next_id(&self) -> StoreResult<OrderId> {
        match self.orders.last_key_value() {
            None => Ok(1),
            Some((&max, _)) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
        }
    }

    /// Inserts a new order.
    pub fn add(&mut self, order: Order) -> StoreResult<()> {
        if self.orders.contains_key(&order.id) {
            return Err(StoreError::DuplicateId(order.id));
        }

        debug!(order_id = order.id, "Storing order");
        self.orders.insert(order.id, order);
        Ok(())
    }

    pub fn get_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Every order, in id order.
    pub fn get_all(&self) -> Vec<Order> {
        self.orders.values().cloned().collect()
    }

    /// Replaces the stored order that has the same id.
    pub fn update(&mut self, order: Order) -> StoreResult<()> {
        match self.orders.get_mut(&order.id) {
            Some(slot) => {
                debug!(order_id = order.id, "Replacing order");
                *slot = order;
                Ok(())
            }
            None => Err(StoreError::NotFound(order.id)),
        }
    }

    /// Removes and returns the order with this id.
    pub fn remove(&mut self, id: OrderId) -> StoreResult<Order> {
        let removed = self.orders.remove(&id).ok_or(StoreError::NotFound(id))?;
        debug!(order_id = id, "Removed order");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
