//! Response DTOs for the student API
//!
//! Defines the non-entity outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the readiness endpoint (GET /ready)
#[derive(Debug, Clone, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub store: &'static str,
}

impl ReadyResponse {
    pub fn ready() -> Self {
        Self {
            status: "ready",
            store: "ok",
        }
    }

    pub fn degraded() -> Self {
        Self {
            status: "degraded",
            store: "unavailable",
        }
    }
}

/// Error response body for every non-404 error condition
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
