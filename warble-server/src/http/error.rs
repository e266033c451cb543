//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Domain validation failures map to 400 with the validation message;
//! storage and transaction failures are logged and returned as a generic
//! 500 body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use warble_core::DomainError;

use crate::error::Error;

/// API error type with automatic HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(DomainError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Storage or transaction error (500, logged)
    Internal(Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Internal(e) => {
                // Log the actual error, return a generic message.
                tracing::error!("storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        match e {
            Error::Domain(domain) => Self::Validation(domain),
            other => Self::Internal(other),
        }
    }
}
