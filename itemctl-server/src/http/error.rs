//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every non-2xx body carries a `message` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::error::{Operation, ServiceError};
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body rejected (400)
    Validation {
        operation: Operation,
        error: ValidationError,
    },

    /// Path segment could not be decoded (400)
    InvalidPath { reason: String },

    /// Name already taken (409)
    Conflict { name: String },

    /// Target item absent (404)
    NotFound { name: String },

    /// Store failure (500, logged)
    Database {
        operation: Operation,
        source: StoreError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation { operation, error } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": format!("{} {}", operation.invalid_input_message(), error)
                }),
            ),
            Self::InvalidPath { reason } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": format!("Invalid item name in path. {}", reason)
                }),
            ),
            Self::Conflict { .. } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": "Item with this name already exists."
                }),
            ),
            Self::NotFound { name } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("Item '{}' not found.", name)
                }),
            ),
            Self::Database { operation, source } => {
                // Log the actual error, return generic message
                tracing::error!(%operation, "Database error: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": operation.failure_message()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidInput { operation, source } => Self::Validation {
                operation,
                error: source,
            },
            ServiceError::Conflict { name } => Self::Conflict { name },
            ServiceError::NotFound { name } => Self::NotFound { name },
            ServiceError::StoreUnavailable { operation, source } => {
                Self::Database { operation, source }
            }
        }
    }
}
