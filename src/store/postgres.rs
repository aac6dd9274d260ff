//! Postgres student store
//!
//! Backs the `students` table through a pooled `sqlx` connection.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::error::Result;
use crate::models::{Student, StudentFields};
use crate::store::StudentStore;

const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id SERIAL PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        school TEXT NOT NULL
    )
"#;

#[derive(Debug, Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    /// Wraps an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Creates the `students` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_STUDENTS_TABLE).execute(&self.pool).await?;
        info!("students table ready");
        Ok(())
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn find_all(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, school FROM students",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(students)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, school FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    async fn insert(&self, fields: StudentFields) -> Result<Student> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (first_name, last_name, school) VALUES ($1, $2, $3) \
             RETURNING id, first_name, last_name, school",
        )
        .bind(fields.first_name)
        .bind(fields.last_name)
        .bind(fields.school)
        .fetch_one(&self.pool)
        .await?;
        Ok(student)
    }

    async fn update(&self, id: i32, fields: StudentFields) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "UPDATE students SET first_name = $1, last_name = $2, school = $3 WHERE id = $4 \
             RETURNING id, first_name, last_name, school",
        )
        .bind(fields.first_name)
        .bind(fields.last_name)
        .bind(fields.school)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    async fn remove(&self, id: i32) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "DELETE FROM students WHERE id = $1 RETURNING id, first_name, last_name, school",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
