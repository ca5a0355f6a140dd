//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{DomainError, ValidationFailure};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Create request failed validation.
    Validation(ValidationFailure),
    /// No record exists for the identifier.
    NotFound(String),
    /// Malformed request from the client.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Retrieval-style errors keep the original wire contract:
            // a {"message": ...} body.
            ApiError::NotFound(message) => {
                let body = serde_json::json!({ "message": message });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            ApiError::Validation(failure) => {
                let body = serde_json::json!({
                    "error": failure.to_string(),
                    "fields": failure.violations,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            ApiError::BadRequest(message) => {
                let body = serde_json::json!({ "error": message });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "internal server error");
                let body = serde_json::json!({ "error": message });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(failure) => ApiError::Validation(failure),
            DomainError::Store(store_err) => {
                if store_err.is_not_found() {
                    ApiError::NotFound(store_err.to_string())
                } else {
                    ApiError::Internal(store_err.to_string())
                }
            }
        }
    }
}
