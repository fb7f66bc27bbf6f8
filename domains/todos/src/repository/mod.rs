//! Repository implementations for the Todos domain

pub mod memory;
pub mod todos;

pub use memory::InMemoryTodoRepository;
pub use todos::PgTodoRepository;

use easel_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::{Todo, TodoDraft, TodoPatch};

/// Filter for `find`; an empty filter matches all records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    pub content: Option<String>,
}

/// CRUD facade over persistent storage for the todo resource.
///
/// The handle is constructed by the process entry point and injected into the
/// API state; no module-level connection singletons. Each operation is a
/// single storage primitive relying on the store's own atomicity.
#[async_trait::async_trait]
pub trait TodoRepository: Send + Sync {
    /// Return every stored todo matching the filter; ordering is
    /// store-defined.
    async fn find(&self, filter: &TodoFilter) -> Result<Vec<Todo>, RepositoryError>;

    /// Point lookup by id; `None` is a distinct outcome from an entity with
    /// empty fields.
    async fn find_one(&self, id: Uuid) -> Result<Option<Todo>, RepositoryError>;

    /// Persist a validated draft with a store-assigned id.
    ///
    /// Returns just the new id; callers fetch the hydrated record via
    /// `find_one`. The two-step shape keeps `create`'s return uniform.
    async fn create(&self, draft: &TodoDraft) -> Result<Uuid, RepositoryError>;

    /// Merge the given fields into the stored record; errors with
    /// `RepositoryError::NotFound` if the id does not exist.
    async fn update(&self, id: Uuid, patch: &TodoPatch) -> Result<Uuid, RepositoryError>;

    /// Remove the record, reporting whether anything was actually removed.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
