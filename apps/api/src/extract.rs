//! # Request Extractors
//!
//! Thin wrappers around axum's `Json`, `Path` and `Query` whose rejections are
//! rendered as problem details instead of axum's plain-text bodies.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  body / path / query                                                    │
//! │         │                                                               │
//! │         ├── deserializes ──► handler ──► OrderService                   │
//! │         │                                                               │
//! │         └── rejected ──► 400 application/problem+json                   │
//! │                          code = "malformed-request"                     │
//! │                          detail = axum's rejection text                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Anything that deserializes is handed to the order service, so ids that are
//! well-formed but not on the menu still fail with the domain error codes.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::http::Uri;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;
use crate::AppState;

/// JSON body extractor.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

/// Query string extractor.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T> FromRequest<AppState> for ApiJson<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let uri = req.uri().clone();

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(malformed(state, &uri, rejection.body_text())),
        }
    }
}

impl<T> FromRequestParts<AppState> for ApiPath<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(malformed(state, &parts.uri, rejection.body_text())),
        }
    }
}

impl<T> FromRequestParts<AppState> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(malformed(state, &parts.uri, rejection.body_text())),
        }
    }
}

fn malformed(state: &AppState, uri: &Uri, detail: String) -> ApiError {
    warn!(instance = uri.path(), detail = %detail, "Malformed request");
    ApiError::malformed(detail, &state.config.problem_base, uri.path())
}
