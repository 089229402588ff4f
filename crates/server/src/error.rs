//! Error-to-response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::wire::ErrorResponse;

/// Error type returned by every handler.
///
/// The service contract is flat: any failed request, whatever the cause,
/// answers `400 Bad Request` with `{"error": "..."}`. Store errors carry
/// their typed variant until this boundary; malformed bodies are caught at
/// extraction time and folded in here as well.
#[derive(Debug)]
pub enum ApiError {
    /// A store precondition failed (invalid key, conflict, not found, quota).
    Store(cubby_core::Error),
    /// The request body could not be decoded.
    BadRequest(String),
}

/// Result alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Store(err) => err.to_string(),
            ApiError::BadRequest(message) => message,
        };
        let body = ErrorResponse { error: message };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<cubby_core::Error> for ApiError {
    fn from(err: cubby_core::Error) -> Self {
        ApiError::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    }
}
