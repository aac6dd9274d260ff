//! Student entity and its wire payload
//!
//! `Student` is both the stored row and the JSON shape returned to clients.
//! `StudentPayload` is the strict schema accepted on create and update.

use serde::{de::IgnoredAny, Deserialize, Serialize};

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Store-assigned primary key
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Opaque school identifier or name
    pub school: String,
}

/// The client-replaceable portion of a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    pub school: String,
}

impl Student {
    /// Builds a student from a store-assigned id and client fields.
    pub fn from_fields(id: i32, fields: StudentFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            school: fields.school,
        }
    }

    /// Overwrites every replaceable field. The id is left untouched.
    pub fn apply(&mut self, fields: StudentFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.school = fields.school;
    }
}

/// Request body for POST /students and PUT /students/:id
///
/// Unknown fields are rejected. `id` is tolerated with any JSON value so that
/// a previously returned student can be sent back as-is, but it is never
/// inspected and never reaches the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudentPayload {
    #[serde(default)]
    pub id: Option<IgnoredAny>,
    pub first_name: String,
    pub last_name: String,
    pub school: String,
}

impl StudentPayload {
    /// Parses a raw request body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Validates the text fields
    ///
    /// Returns an error message if validation fails, None if valid.
    /// NUL characters are refused because Postgres `TEXT` cannot hold them.
    pub fn validate(&self) -> Option<String> {
        for (name, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("school", &self.school),
        ] {
            if value.contains('\0') {
                return Some(format!("{} must not contain NUL characters", name));
            }
        }
        None
    }

    /// Drops the client-supplied id and keeps the replaceable fields.
    pub fn into_fields(self) -> StudentFields {
        StudentFields {
            first_name: self.first_name,
            last_name: self.last_name,
            school: self.school,
        }
    }
}
