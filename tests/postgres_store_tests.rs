//! Postgres Store Tests
//!
//! Need a disposable database: `DATABASE_URL=postgres://... cargo test -- --ignored`.
//! Every test works on its own rows so they can share one database.

use student_api::models::StudentFields;
use student_api::{PgStudentStore, StudentStore};

async fn connect() -> PgStudentStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for Postgres tests");
    let store = PgStudentStore::connect(&url, 2).await.unwrap();
    store.ensure_schema().await.unwrap();
    store
}

fn fields(first: &str, last: &str, school: &str) -> StudentFields {
    StudentFields {
        first_name: first.to_string(),
        last_name: last.to_string(),
        school: school.to_string(),
    }
}

#[tokio::test]
#[ignore]
async fn test_pg_crud_cycle() {
    let store = connect().await;

    let created = store.insert(fields("Ada", "Lovelace", "Cambridge")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(created.clone()));

    let updated = store
        .update(created.id, fields("Ada", "King", "London"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.last_name, "King");

    let all = store.find_all().await.unwrap();
    assert!(all.iter().any(|s| s == &updated));

    let removed = store.remove(created.id).await.unwrap();
    assert_eq!(removed, Some(updated));
    assert!(store.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_pg_missing_rows() {
    let store = connect().await;

    assert!(store.find_by_id(i32::MAX).await.unwrap().is_none());
    assert!(store.update(i32::MAX, fields("A", "B", "C")).await.unwrap().is_none());
    assert!(store.remove(i32::MAX).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_pg_ping_and_schema_idempotent() {
    let store = connect().await;
    store.ensure_schema().await.unwrap();
    store.ping().await.unwrap();
}
