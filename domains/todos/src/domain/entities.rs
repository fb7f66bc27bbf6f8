//! Domain entities for the Todos domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Todo entity
///
/// The identifier is store-assigned and immutable for the lifetime of the
/// record; timestamps are maintained by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new todo.
///
/// Drafts handed to the repository have already passed request validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub content: String,
}

/// Partial update for an existing todo.
///
/// Absent fields keep their stored value; the identifier cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoPatch {
    pub content: Option<String>,
}
