//! # Order Routes
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /api/orders/quote ──► 200 price preview (nothing stored)          │
//! │                                                                         │
//! │  POST /api/orders ──► 201 + Location ──► GET /api/orders/{id}           │
//! │                                │                                        │
//! │                                ├──► PUT /api/orders/{id}  (re-priced)   │
//! │                                │                                        │
//! │                                └──► DELETE /api/orders/{id} ──► 204     │
//! │                                                                         │
//! │  Rule violations ──► 400 problem    Unknown id ──► 404 problem          │
//! │  Undecodable body or path ──► 400 malformed-request problem             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use goodburger_core::{Order, OrderId, OrderRequest, PriceBreakdown};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::AppState;

/// Price preview returned by the quote endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub subtotal_cents: i64,
    pub discount_rate_bps: u32,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl From<PriceBreakdown> for QuoteResponse {
    fn from(breakdown: PriceBreakdown) -> Self {
        QuoteResponse {
            subtotal_cents: breakdown.subtotal.cents(),
            discount_rate_bps: breakdown.discount_rate.bps(),
            discount_cents: breakdown.discount().cents(),
            total_cents: breakdown.total.cents(),
        }
    }
}

/// `GET /api/orders`
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    debug!("list_orders");
    Json(state.orders.list_orders())
}

/// `GET /api/orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
    uri: Uri,
) -> Result<Json<Order>, ApiError> {
    debug!(order_id = id, "get_order");
    state
        .orders
        .get_order(id)
        .map(Json)
        .map_err(|err| state.problem(err, &uri))
}

/// `POST /api/orders`
pub async fn create_order(
    State(state): State<AppState>,
    uri: Uri,
    ApiJson(request): ApiJson<OrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state
        .orders
        .create_order(&request)
        .map_err(|err| state.problem(err, &uri))?;

    let location = format!("/api/orders/{}", order.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(order)))
}

/// `POST /api/orders/quote`
pub async fn quote_order(
    State(state): State<AppState>,
    uri: Uri,
    ApiJson(request): ApiJson<OrderRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    state
        .orders
        .quote(&request)
        .map(|breakdown| Json(breakdown.into()))
        .map_err(|err| state.problem(err, &uri))
}

/// `PUT /api/orders/{id}`
pub async fn update_order(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
    uri: Uri,
    ApiJson(request): ApiJson<OrderRequest>,
) -> Result<Json<Order>, ApiError> {
    state
        .orders
        .update_order(id, &request)
        .map(Json)
        .map_err(|err| state.problem(err, &uri))
}

/// `DELETE /api/orders/{id}`
pub async fn delete_order(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<OrderId>,
    uri: Uri,
) -> Result<StatusCode, ApiError> {
    state
        .orders
        .delete_order(id)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|err| state.problem(err, &uri))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Response, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::error::APPLICATION_PROBLEM_JSON;
    use crate::routes::test_support::{app, body_json, empty_request, json_request, raw_request};

    /// Asserts a problem+json response and returns its body.
    async fn problem(response: Response<Body>, status: StatusCode, code: &str) -> Value {
        assert_eq!(response.status(), status);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            APPLICATION_PROBLEM_JSON
        );
        let body = body_json(response).await;
        assert_eq!(body["code"], code);
        assert_eq!(body["status"], status.as_u16());
        body
    }

    async fn create(app: &Router, body: Value) -> Value {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/orders", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_create_order() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/orders",
                json!({ "sandwichId": 1, "extraIds": [4, 5] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/orders/1");

        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["subtotalCents"], 950);
        assert_eq!(body["discountRateBps"], 2000);
        assert_eq!(body["totalCents"], 760);
        assert!(body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = app();
        let created = create(&app, json!({ "sandwichId": 2, "extraIds": [5] })).await;

        let response = app
            .oneshot(empty_request("GET", "/api/orders/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_create_validation_failure_is_problem() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/orders",
                json!({ "sandwichId": 1, "extraIds": [4, 4] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            APPLICATION_PROBLEM_JSON
        );

        let body = body_json(response).await;
        assert_eq!(body["type"], "http://localhost/problems/duplicated-extras");
        assert_eq!(body["status"], 400);
        assert_eq!(body["instance"], "/api/orders");
        assert_eq!(body["code"], "duplicated-extras");
    }

    #[tokio::test]
    async fn test_get_missing_order_is_404() {
        let response = app()
            .oneshot(empty_request("GET", "/api/orders/99"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], "order-not-found");
        assert_eq!(body["instance"], "/api/orders/99");
    }

    #[tokio::test]
    async fn test_list_orders() {
        let app = app();
        create(&app, json!({ "sandwichId": 1 })).await;
        create(&app, json!({ "sandwichId": 3, "extraIds": [4] })).await;

        let response = app
            .oneshot(empty_request("GET", "/api/orders"))
            .await
            .unwrap();
        let body = body_json(response).await;
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_update_order() {
        let app = app();
        let created = create(&app, json!({ "sandwichId": 1 })).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/orders/1",
                json!({ "sandwichId": 1, "extraIds": [5] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["createdAt"], created["createdAt"]);
        assert_eq!(body["totalCents"], 638);
    }

    #[tokio::test]
    async fn test_update_errors() {
        let app = app();
        create(&app, json!({ "sandwichId": 1 })).await;

        let missing = app
            .clone()
            .oneshot(json_request("PUT", "/api/orders/7", json!({ "sandwichId": 1 })))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let invalid = app
            .oneshot(json_request("PUT", "/api/orders/1", json!({ "sandwichId": 5 })))
            .await
            .unwrap();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(invalid).await["code"], "invalid-sandwich-id");
    }

    #[tokio::test]
    async fn test_delete_order_twice() {
        let app = app();
        create(&app, json!({ "sandwichId": 1 })).await;

        let first = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/orders/1"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = app
            .oneshot(empty_request("DELETE", "/api/orders/1"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quote_does_not_create() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/orders/quote",
                json!({ "sandwichId": 1, "extraIds": [5] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["subtotalCents"], 750);
        assert_eq!(body["discountRateBps"], 1500);
        assert_eq!(body["discountCents"], 112);
        assert_eq!(body["totalCents"], 638);

        let list = app
            .oneshot(empty_request("GET", "/api/orders"))
            .await
            .unwrap();
        assert_eq!(body_json(list).await, json!([]));
    }

    #[tokio::test]
    async fn test_out_of_range_ids_reach_validation() {
        let app = app();

        let negative_sandwich = app
            .clone()
            .oneshot(json_request("POST", "/api/orders", json!({ "sandwichId": -1 })))
            .await
            .unwrap();
        let body = problem(negative_sandwich, StatusCode::BAD_REQUEST, "invalid-sandwich-id").await;
        assert_eq!(body["detail"], "Invalid sandwich ID -1.");

        let negative_extra = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/orders",
                json!({ "sandwichId": 1, "extraIds": [-3] }),
            ))
            .await
            .unwrap();
        let body = problem(negative_extra, StatusCode::BAD_REQUEST, "invalid-extra-id").await;
        assert_eq!(body["detail"], "Extra item ID -3 is invalid.");

        let missing_sandwich = app
            .clone()
            .oneshot(json_request("POST", "/api/orders", json!({ "extraIds": [4] })))
            .await
            .unwrap();
        problem(missing_sandwich, StatusCode::BAD_REQUEST, "invalid-sandwich-id").await;

        let list = app
            .oneshot(empty_request("GET", "/api/orders"))
            .await
            .unwrap();
        assert_eq!(body_json(list).await, json!([]));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_malformed_request() {
        let app = app();

        let wrong_type = app
            .clone()
            .oneshot(json_request("POST", "/api/orders", json!({ "sandwichId": "one" })))
            .await
            .unwrap();
        let body = problem(wrong_type, StatusCode::BAD_REQUEST, "malformed-request").await;
        assert_eq!(body["type"], "http://localhost/problems/malformed-request");
        assert_eq!(body["instance"], "/api/orders");

        let broken_json = app
            .clone()
            .oneshot(raw_request(
                "POST",
                "/api/orders/quote",
                Some("application/json"),
                r#"{"sandwichId": 1,"#,
            ))
            .await
            .unwrap();
        problem(broken_json, StatusCode::BAD_REQUEST, "malformed-request").await;

        let no_content_type = app
            .clone()
            .oneshot(raw_request("POST", "/api/orders", None, r#"{"sandwichId": 1}"#))
            .await
            .unwrap();
        problem(no_content_type, StatusCode::BAD_REQUEST, "malformed-request").await;

        let too_large = app
            .oneshot(json_request("PUT", "/api/orders/1", json!({ "sandwichId": 1e30 })))
            .await
            .unwrap();
        problem(too_large, StatusCode::BAD_REQUEST, "malformed-request").await;
    }

    #[tokio::test]
    async fn test_unparseable_order_id_is_malformed_request() {
        let app = app();

        let get = app
            .clone()
            .oneshot(empty_request("GET", "/api/orders/abc"))
            .await
            .unwrap();
        let body = problem(get, StatusCode::BAD_REQUEST, "malformed-request").await;
        assert_eq!(body["instance"], "/api/orders/abc");

        let put = app
            .clone()
            .oneshot(json_request("PUT", "/api/orders/abc", json!({ "sandwichId": 1 })))
            .await
            .unwrap();
        problem(put, StatusCode::BAD_REQUEST, "malformed-request").await;

        let delete = app
            .oneshot(empty_request("DELETE", "/api/orders/-1"))
            .await
            .unwrap();
        problem(delete, StatusCode::BAD_REQUEST, "malformed-request").await;
    }
}
