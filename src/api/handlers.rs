//! API Handlers
//!
//! HTTP request handlers for the student CRUD endpoints and the service
//! probes. Each handler performs one store round trip.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, ReadyResponse, Student, StudentFields, StudentPayload};
use crate::store::{MemoryStudentStore, StudentStore};

/// Application state shared across all handlers.
///
/// Holds the injected store accessor; no other mutable state is shared
/// between requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: impl StudentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates an AppState backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStudentStore::new())
    }
}

fn parse_id(id: std::result::Result<Path<i32>, PathRejection>) -> Result<i32> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::InvalidId(rejection.body_text()))
}

fn parse_payload(body: &Bytes) -> Result<StudentFields> {
    let payload =
        StudentPayload::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    if let Some(error_msg) = payload.validate() {
        return Err(ApiError::InvalidBody(error_msg));
    }
    if payload.id.is_some() {
        debug!("Ignoring client-supplied student id");
    }
    Ok(payload.into_fields())
}

/// Handler for GET|POST /
pub async fn index_handler() -> &'static str {
    info!("Processed welcome request");
    "Welcome to the Student API!"
}

/// Handler for GET /students
///
/// Returns every student, possibly an empty array.
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>> {
    info!("Processed list students request");
    let students = state.store.find_all().await?;
    Ok(Json(students))
}

/// Handler for GET /students/:id
pub async fn get_student(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<Student>> {
    let id = parse_id(id)?;
    info!(id, "Processed get student request");

    let student = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(student))
}

/// Handler for POST /students
///
/// The store assigns the id; any id in the body is ignored.
pub async fn create_student(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Student>)> {
    info!("Processed create student request");
    let fields = parse_payload(&body)?;

    let student = state.store.insert(fields).await?;
    info!(id = student.id, "Student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// Handler for PUT /students/:id
///
/// Replaces first name, last name and school. A missing id answers 404
/// before the body is looked at.
pub async fn update_student(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> Result<Json<Student>> {
    let id = parse_id(id)?;
    info!(id, "Processed update student request");

    if state.store.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(id));
    }
    let fields = parse_payload(&body)?;

    // The row may vanish between the lookup and the write; last writer wins.
    let student = state
        .store
        .update(id, fields)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(student))
}

/// Handler for DELETE /students/:id
///
/// Responds with the student as it was just before removal.
pub async fn delete_student(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<Student>> {
    let id = parse_id(id)?;
    info!(id, "Processed delete student request");

    let student = state
        .store
        .remove(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(student))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    info!("Processed health request");
    Json(HealthResponse::healthy())
}

/// Handler for GET /ready
///
/// Answers 503 while the store cannot be reached.
pub async fn ready_handler(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    info!("Processed readiness request");
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(ReadyResponse::ready())),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(ReadyResponse::degraded()))
        }
    }
}
