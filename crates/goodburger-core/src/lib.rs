//! # goodburger-core: Pure Business Logic for GoodBurger
//!
//! This crate is the **heart** of GoodBurger. It holds the menu, the order
//! validation rules and the combo pricing as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GoodBurger Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api)                          │   │
//! │  │    GET /api/menu ──► POST /api/orders ──► PUT / DELETE          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              goodburger-orders (OrderService, OrderStore)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ goodburger-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │validation │  │  pricing  │  │   money   │  │   │
//! │  │   │  Catalog  │  │ validate_ │  │  price()  │  │   Money   │  │   │
//! │  │   │ MenuItem  │  │  order()  │  │ discounts │  │ rounding  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Order, OrderRequest, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - The fixed menu catalog
//! - [`validation`] - Order item validation rules
//! - [`pricing`] - Combo discount pricing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use goodburger_core::menu::Catalog;
//! use goodburger_core::pricing::price;
//! use goodburger_core::types::OrderRequest;
//! use goodburger_core::validation::validate_order;
//!
//! let catalog = Catalog::seeded();
//!
//! // X Burger + Fries + Soft drink
//! let request = OrderRequest::new(1, vec![4, 5]);
//! let validated = validate_order(&request, &catalog).unwrap();
//! let breakdown = price(validated.sandwich, &validated.extras);
//!
//! assert_eq!(breakdown.subtotal.cents(), 950);
//! assert_eq!(breakdown.discount_rate.bps(), 2000);
//! assert_eq!(breakdown.total.cents(), 760);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, OrderError, OrderResult, ValidationError};
pub use menu::Catalog;
pub use money::Money;
pub use pricing::PriceBreakdown;
pub use types::*;
pub use validation::ValidatedOrder;

