//! In-memory student store
//!
//! Ordered map keyed by id behind a tokio `RwLock`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};
use crate::models::{Student, StudentFields};
use crate::store::StudentStore;

#[derive(Debug)]
struct Rows {
    students: BTreeMap<i32, Student>,
    /// Next id to hand out; ids are never reused after deletion
    next_id: i32,
}

// == Memory Student Store ==
/// Volatile store with the same id semantics as a `SERIAL` column.
#[derive(Debug)]
pub struct MemoryStudentStore {
    rows: RwLock<Rows>,
}

impl MemoryStudentStore {
    /// Creates an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                students: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored students.
    pub async fn len(&self) -> usize {
        self.rows.read().await.students.len()
    }

    /// Returns true if the store holds no students.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.students.is_empty()
    }
}

impl Default for MemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn find_all(&self) -> Result<Vec<Student>> {
        let rows = self.rows.read().await;
        Ok(rows.students.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>> {
        let rows = self.rows.read().await;
        Ok(rows.students.get(&id).cloned())
    }

    async fn insert(&self, fields: StudentFields) -> Result<Student> {
        let mut rows = self.rows.write().await;
        let id = rows.next_id;
        rows.next_id = id
            .checked_add(1)
            .ok_or_else(|| ApiError::Internal("student id space exhausted".to_string()))?;

        let student = Student::from_fields(id, fields);
        rows.students.insert(id, student.clone());
        Ok(student)
    }

    async fn update(&self, id: i32, fields: StudentFields) -> Result<Option<Student>> {
        let mut rows = self.rows.write().await;
        Ok(rows.students.get_mut(&id).map(|student| {
            student.apply(fields);
            student.clone()
        }))
    }

    async fn remove(&self, id: i32) -> Result<Option<Student>> {
        let mut rows = self.rows.write().await;
        Ok(rows.students.remove(&id))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str, school: &str) -> StudentFields {
        StudentFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            school: school.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemoryStudentStore::new();
        let a = store.insert(fields("Ada", "Lovelace", "Cambridge")).await.unwrap();
        let b = store.insert(fields("Alan", "Turing", "Princeton")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryStudentStore::new();
        let created = store.insert(fields("Ada", "Lovelace", "Cambridge")).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let store = MemoryStudentStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let store = MemoryStudentStore::new();
        let created = store.insert(fields("Ada", "Lovelace", "Cambridge")).await.unwrap();

        let updated = store
            .update(created.id, fields("Ada", "King", "London"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.last_name, "King");
        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = MemoryStudentStore::new();
        let result = store.update(5, fields("A", "B", "C")).await.unwrap();
        assert!(result.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_remove_returns_last_state() {
        let store = MemoryStudentStore::new();
        let created = store.insert(fields("Ada", "Lovelace", "Cambridge")).await.unwrap();

        let removed = store.remove(created.id).await.unwrap();
        assert_eq!(removed, Some(created.clone()));
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
        assert!(store.remove(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_remove() {
        let store = MemoryStudentStore::new();
        let first = store.insert(fields("A", "A", "A")).await.unwrap();
        store.remove(first.id).await.unwrap();
        let second = store.insert(fields("B", "B", "B")).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
