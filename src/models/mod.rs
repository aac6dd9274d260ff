//! Entity and response models for the student API
//!
//! This module defines the student entity, its request payload, and the
//! auxiliary response bodies.

pub mod responses;
pub mod student;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, ReadyResponse};
pub use student::{Student, StudentFields, StudentPayload};
