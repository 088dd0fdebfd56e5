//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a status code and produces the JSON
//! response envelope `{"success": false, "error": "message"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type that implements `IntoResponse`.
///
/// Variants map to status codes:
/// - `BadRequest` → 400 (missing URL, invalid parameters, fetch failures)
/// - `Internal` → 500 (any other processing failure)
///
/// No partial results accompany an error — the response is the envelope
/// alone.
#[derive(Debug)]
pub enum ApiError {
    /// Invalid input or unfetchable page (400).
    BadRequest(String),
    /// Unexpected pipeline failure (500).
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = axum::Json(json!({ "success": false, "error": message }));
        (status, body).into_response()
    }
}
