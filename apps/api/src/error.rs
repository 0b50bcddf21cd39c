//! # API Error Type
//!
//! Renders [`OrderError`]s as RFC 9457 problem details.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  OrderService ── OrderError ──► ApiError::from_order(err, base, path)  │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                     ErrorKind::Validation → 400                         │
//! │                     ErrorKind::NotFound   → 404                         │
//! │                     ErrorKind::Internal   → 500 (logged)                │
//! │                                                                         │
//! │  Rejected extractor ──► ApiError::malformed ──► 400 malformed-request   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! ```json
//! {
//!   "type": "http://localhost/problems/invalid-extra-id",
//!   "title": "Invalid extra",
//!   "status": 400,
//!   "detail": "Extra item ID 9 is invalid.",
//!   "instance": "/api/orders",
//!   "code": "invalid-extra-id"
//! }
//! ```

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use goodburger_core::{ErrorKind, OrderError};
use serde::Serialize;

/// Content type for problem details.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Code for bodies, paths and queries that could not be deserialized.
pub const MALFORMED_REQUEST: &str = "malformed-request";

/// Problem details body.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_url: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
    /// Machine-readable error category.
    pub code: String,
}

/// Error returned from HTTP handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    problem: Problem,
}

impl ApiError {
    /// Maps an order failure to a problem response.
    pub fn from_order(err: &OrderError, problem_base: &str, instance: &str) -> Self {
        let status = match err.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => {
                tracing::error!(error = %err, instance, "Internal order failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        ApiError {
            status,
            problem: Problem {
                type_url: format!("{}/{}", problem_base, err.code()),
                title: err.title().to_string(),
                status: status.as_u16(),
                detail: err.to_string(),
                instance: instance.to_string(),
                code: err.code().to_string(),
            },
        }
    }

    /// A request that never reached the order service because it could not
    /// be deserialized.
    pub fn malformed(detail: impl Into<String>, problem_base: &str, instance: &str) -> Self {
        let status = StatusCode::BAD_REQUEST;

        ApiError {
            status,
            problem: Problem {
                type_url: format!("{}/{}", problem_base, MALFORMED_REQUEST),
                title: "Malformed request".to_string(),
                status: status.as_u16(),
                detail: detail.into(),
                instance: instance.to_string(),
                code: MALFORMED_REQUEST.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, APPLICATION_PROBLEM_JSON)],
            Json(self.problem),
        )
            .into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.problem.code, self.problem.detail)
    }
}

impl std::error::Error for ApiError {}
