//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and
//! produces a JSON response body `{"error": "message"}`. Core
//! [`FeatureError`]s convert via `From`: validation failures are the
//! caller's fault (400), computation failures are ours (500); a
//! configuration error reaching a handler means startup validation was
//! bypassed, which is also a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kuona_core::FeatureError;
use serde_json::json;

/// Application-level error type that implements `IntoResponse`.
///
/// Each variant maps to an HTTP status code:
/// - `NotFound` → 404
/// - `BadRequest` → 400
/// - `Internal` → 500
#[derive(Debug)]
pub enum ApiError {
    /// No transcript for the requested (ticker, call_date) (404).
    NotFound(String),
    /// Invalid request parameters or transcript input (400).
    BadRequest(String),
    /// Unexpected server error (500).
    Internal(String),
}

impl From<FeatureError> for ApiError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::Validation(msg) => ApiError::BadRequest(msg),
            FeatureError::Computation(msg) => {
                tracing::error!("feature computation failed: {}", msg);
                ApiError::Internal(msg)
            }
            FeatureError::Configuration(msg) => {
                tracing::error!("lexicon configuration error at request time: {}", msg);
                ApiError::Internal(msg)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
