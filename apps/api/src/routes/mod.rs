//! # Route Table
//!
//! ```text
//! GET    /health                 health::health
//! GET    /api/menu               menu::list_menu      (?category=sandwich|fries|drink)
//! GET    /api/menu/sandwiches    menu::list_sandwiches
//! GET    /api/menu/extras        menu::list_extras
//! GET    /api/orders             orders::list_orders
//! POST   /api/orders             orders::create_order
//! POST   /api/orders/quote       orders::quote_order
//! GET    /api/orders/{id}        orders::get_order
//! PUT    /api/orders/{id}        orders::update_order
//! DELETE /api/orders/{id}        orders::delete_order
//! ```

pub mod health;
pub mod menu;
pub mod orders;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/menu", get(menu::list_menu))
        .route("/api/menu/sandwiches", get(menu::list_sandwiches))
        .route("/api/menu/extras", get(menu::list_extras))
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/quote", post(orders::quote_order))
        .route(
            "/api/orders/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, Response};
    use axum::Router;
    use goodburger_core::Catalog;
    use goodburger_orders::OrderService;
    use serde_json::Value;

    use crate::{build_router, ApiConfig, AppState};

    pub fn app() -> Router {
        let service = Arc::new(OrderService::new(Catalog::seeded()));
        build_router(AppState::new(service, ApiConfig::default()))
    }

    pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn raw_request(
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub async fn body_json(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
