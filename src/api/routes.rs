//! API Routes
//!
//! Configures the Axum router with the student endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_student, delete_student, get_student, health_handler, index_handler, list_students,
    ready_handler, update_student, AppState,
};
use crate::config::normalize_prefix;

/// Creates the main router with all endpoints configured at the root.
///
/// # Endpoints
/// - `GET /students` - List students
/// - `POST /students` - Create a student
/// - `GET /students/:id` - Get a student
/// - `PUT /students/:id` - Update a student
/// - `DELETE /students/:id` - Delete a student
/// - `GET|POST /` - Welcome message
/// - `GET /health` - Liveness probe
/// - `GET /ready` - Store readiness probe
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    create_router_with_prefix(state, "")
}

/// Same as [`create_router`], with every route mounted under `prefix`.
pub fn create_router_with_prefix(state: AppState, prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/", get(index_handler).post(index_handler))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .with_state(state);

    let prefix = normalize_prefix(prefix);
    let router = if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(&prefix, routes)
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}
