//! # Menu Routes
//!
//! Read-only views of the catalog. An unknown `?category=` is a
//! `malformed-request` problem.

use axum::extract::State;
use axum::Json;
use goodburger_core::{Category, MenuItem};
use serde::Deserialize;
use tracing::debug;

use crate::extract::ApiQuery;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub category: Option<Category>,
}

/// `GET /api/menu` - the whole menu, or one category with `?category=`.
pub async fn list_menu(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MenuQuery>,
) -> Json<Vec<MenuItem>> {
    debug!(category = ?query.category, "list_menu");
    let catalog = state.orders.catalog();

    let items = match query.category {
        Some(category) => catalog.by_category(category),
        None => catalog.items(),
    };
    Json(items.into_iter().cloned().collect())
}

/// `GET /api/menu/sandwiches`
pub async fn list_sandwiches(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    let items = state.orders.catalog().by_category(Category::Sandwich);
    Json(items.into_iter().cloned().collect())
}

/// `GET /api/menu/extras` - fries and drinks.
pub async fn list_extras(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    let items = state.orders.catalog().extras();
    Json(items.into_iter().cloned().collect())
}
