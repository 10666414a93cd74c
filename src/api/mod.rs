//! HTTP surface of the dashboard.
//!
//! Axum router serving the rendered page, the layout tree and the
//! reactive-update endpoint.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::reactors::ChartError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::page::index))
        .route("/static/app.js", get(routes::page::app_js))
        .route("/api/layout", get(routes::page::layout))
        .route("/api/update", post(routes::update::update))
        .route("/health", get(routes::health))
        .with_state(state)
}

/// Same as [`build_router`] with HTTP request tracing.
pub fn build_router_with_access_log(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}
