//! Store Module
//!
//! Accessor abstraction over the persistent student table, with a Postgres
//! backend for deployments and an in-memory backend for local runs and tests.

mod memory;
mod postgres;


use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Student, StudentFields};

pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;

// == Student Store Trait ==
/// Row-level operations on the student table.
///
/// Handlers receive an implementation through `AppState`; every call is a
/// single round trip and nothing is cached between calls.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All students in store-native order.
    async fn find_all(&self) -> Result<Vec<Student>>;

    /// Looks up a student by primary key.
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>>;

    /// Inserts a new row and returns it with the assigned id.
    async fn insert(&self, fields: StudentFields) -> Result<Student>;

    /// Replaces the mutable fields of an existing row.
    ///
    /// Returns `None` if no row has this id.
    async fn update(&self, id: i32, fields: StudentFields) -> Result<Option<Student>>;

    /// Removes a row, returning its last state, or `None` if absent.
    async fn remove(&self, id: i32) -> Result<Option<Student>>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<()>;
}
