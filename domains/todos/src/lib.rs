//! Todos domain: entities, repository, and API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Todo, TodoDraft, TodoPatch};
// Re-export repository types
pub use repository::{InMemoryTodoRepository, PgTodoRepository, TodoFilter, TodoRepository};

// Re-export API types
pub use api::routes;
pub use api::TodosState;
