//! # goodburger-orders: Order Store and Service
//!
//! In-memory order persistence and the orchestration of
//! validate → price → persist for every order request.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create_order / update_order                          │
//! │                                                                         │
//! │  Received ──► Validating ──► Pricing ──► Persisting ──► Done            │
//! │                   │                          │                          │
//! │                   └──────────► Failed ◄──────┘                          │
//! │                                                                         │
//! │  No retries: a failure is returned to the caller as an OrderError.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use goodburger_core::{Catalog, OrderRequest};
//! use goodburger_orders::OrderService;
//!
//! let service = OrderService::new(Catalog::seeded());
//!
//! let order = service.create_order(&OrderRequest::new(1, vec![4, 5])).unwrap();
//! assert_eq!(order.id, 1);
//! assert_eq!(order.total_cents, 760);
//!
//! service.delete_order(order.id).unwrap();
//! assert!(service.list_orders().is_empty());
//! ```

pub mod error;
pub mod service;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use service::OrderService;
pub use store::OrderStore;
