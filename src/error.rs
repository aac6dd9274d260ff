//! Error types for the student API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// Plain-text body returned for every missing student.
pub const NOT_FOUND_BODY: &str = "Not Found";

// == Api Error Enum ==
/// Unified error type for the student API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No student row with the given id
    #[error("Student not found: {0}")]
    NotFound(i32),

    /// Path id is not a 32-bit integer
    #[error("Invalid student id: {0}")]
    InvalidId(String),

    /// Request body is not a valid student payload
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Store round trip failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(_) => return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            ApiError::InvalidId(_) | ApiError::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Database(e) => {
                error!(error = %e, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student API.
pub type Result<T> = std::result::Result<T, ApiError>;
