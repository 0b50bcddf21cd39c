//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! OrderStore mutation
//!       │
//!       ▼
//! StoreError (this module)
//!       │
//!       ▼
//! OrderError (goodburger-core) ← decided by OrderService per operation
//! ```
//! A missing id on `remove` is the caller's mistake (`OrderNotFound`); a
//! missing id on `update` right after a successful lookup is a defect
//! (`InternalInconsistency`).

use goodburger_core::OrderId;
use thiserror::Error;

/// Order store failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No order with this id.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// An order with this id is already stored.
    #[error("Duplicate order id: {0}")]
    DuplicateId(OrderId),

    /// The largest possible id is already taken.
    #[error("No order ids left after {0}")]
    IdsExhausted(OrderId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
