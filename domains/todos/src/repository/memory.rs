//! In-memory todo repository
//!
//! Keeps records in a process-local map behind an async lock. Used by the
//! test suite and by local development without a database; implements the
//! same contract as the Postgres repository.

use std::collections::HashMap;

use chrono::Utc;
use easel_common::RepositoryError;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Todo, TodoDraft, TodoPatch};
use crate::repository::{TodoFilter, TodoRepository};

/// Todo repository backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<HashMap<Uuid, Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find(&self, filter: &TodoFilter) -> Result<Vec<Todo>, RepositoryError> {
        let todos = self.todos.read().await;
        Ok(todos
            .values()
            .filter(|todo| {
                filter
                    .content
                    .as_ref()
                    .map_or(true, |content| &todo.content == content)
            })
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Todo>, RepositoryError> {
        let todos = self.todos.read().await;
        Ok(todos.get(&id).cloned())
    }

    async fn create(&self, draft: &TodoDraft) -> Result<Uuid, RepositoryError> {
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            content: draft.content.clone(),
            created_at: now,
            updated_at: now,
        };

        let id = todo.id;
        self.todos.write().await.insert(id, todo);
        Ok(id)
    }

    async fn update(&self, id: Uuid, patch: &TodoPatch) -> Result<Uuid, RepositoryError> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(&id).ok_or(RepositoryError::NotFound)?;

        if let Some(content) = &patch.content {
            todo.content = content.clone();
        }
        todo.updated_at = Utc::now();

        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.todos.write().await.remove(&id).is_some())
    }
}
