//! Student API - A small CRUD service for student records
//!
//! Exposes list, get, create, update and delete over HTTP on top of a
//! Postgres table, with an in-memory store for local runs and tests.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, create_router_with_prefix, AppState};
pub use config::Config;
pub use error::ApiError;
pub use models::Student;
pub use store::{MemoryStudentStore, PgStudentStore, StudentStore};

/// Builds the application state selected by `config`.
///
/// Connects to Postgres and bootstraps the `students` table when a
/// connection string is configured, otherwise falls back to memory.
pub async fn build_state(config: &Config) -> error::Result<AppState> {
    match &config.database_url {
        Some(url) => {
            let store = PgStudentStore::connect(url, config.max_connections).await?;
            store.ensure_schema().await?;
            tracing::info!("Postgres student store connected");
            Ok(AppState::new(store))
        }
        None => {
            tracing::warn!("No database connection string configured, using in-memory store");
            Ok(AppState::in_memory())
        }
    }
}
