//! # GoodBurger API
//!
//! HTTP front end for the menu and the order service.
//!
//! ## Module Organization
//! ```text
//! goodburger_api/
//! ├── lib.rs          ◄─── You are here (AppState & router)
//! ├── config.rs       ◄─── Environment-driven configuration
//! ├── error.rs        ◄─── problem+json error responses
//! ├── extract.rs      ◄─── Json/Path/Query with problem+json rejections
//! └── routes/
//!     ├── mod.rs      ◄─── Route table
//!     ├── menu.rs     ◄─── GET /api/menu*
//!     ├── orders.rs   ◄─── /api/orders CRUD + quote
//!     └── health.rs   ◄─── GET /health
//! ```
//!
//! The HTTP layer holds no business rules: every handler translates a request
//! into one [`OrderService`] call and the result into a response.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::http::Uri;
use goodburger_core::OrderError;
use goodburger_orders::OrderService;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::build_router;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub orders: Arc<OrderService>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(orders: Arc<OrderService>, config: ApiConfig) -> Self {
        AppState {
            orders,
            config: Arc::new(config),
        }
    }

    /// Renders an order failure for the request at `uri`.
    pub fn problem(&self, err: OrderError, uri: &Uri) -> ApiError {
        ApiError::from_order(&err, &self.config.problem_base, uri.path())
    }
}
