//! API Module
//!
//! HTTP handlers and routing for the student REST API.
//!
//! # Endpoints
//! - `GET /students` - List all students
//! - `POST /students` - Create a student
//! - `GET /students/:id` - Get a student by id
//! - `PUT /students/:id` - Update a student by id
//! - `DELETE /students/:id` - Delete a student by id
//! - `GET /health`, `GET /ready` - Probes

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, create_router_with_prefix};
