//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Connection and storage causes are logged, never echoed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::ConnectionError;
use crate::models::ValidationError;
use crate::service::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Create was accepted by storage but the record could not be read back (400)
    CreationFailed,

    /// Storage backend unavailable (500, logged)
    Unavailable(ConnectionError),

    /// Storage call failed or returned an inconsistent result (500, logged)
    Persistence { message: String },
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
            Self::CreationFailed => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "creation_failed",
                    "message": "user creation failed"
                }),
            ),
            Self::Unavailable(e) => {
                tracing::error!("Storage unavailable: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "unavailable",
                        "message": "storage backend unavailable"
                    }),
                )
            }
            Self::Persistence { message } => {
                // Already logged with its cause by the service layer.
                tracing::debug!("Persistence error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": message
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Connection(e) => Self::Unavailable(e),
            ServiceError::Validation(e) => Self::Validation(e),
            ServiceError::NotFound { id } => Self::NotFound { resource: "user", id },
            ServiceError::CreationFailed => Self::CreationFailed,
            ServiceError::Persistence { reason, .. } => Self::Persistence { message: reason },
        }
    }
}
