//! Postgres todo repository

use easel_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Todo, TodoDraft, TodoPatch};
use crate::repository::{TodoFilter, TodoRepository};

/// Todo repository backed by Postgres
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TodoRepository for PgTodoRepository {
    async fn find(&self, filter: &TodoFilter) -> Result<Vec<Todo>, RepositoryError> {
        let todos = match &filter.content {
            Some(content) => {
                sqlx::query_as::<_, Todo>(
                    r"
                    SELECT id, content, created_at, updated_at
                    FROM todos
                    WHERE content = $1
                    ",
                )
                .bind(content)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Todo>(
                    r"
                    SELECT id, content, created_at, updated_at
                    FROM todos
                    ",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(todos)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Todo>, RepositoryError> {
        let todo = sqlx::query_as::<_, Todo>(
            r"
            SELECT id, content, created_at, updated_at
            FROM todos
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn create(&self, draft: &TodoDraft) -> Result<Uuid, RepositoryError> {
        let id = sqlx::query_scalar(
            r"
            INSERT INTO todos (content)
            VALUES ($1)
            RETURNING id
            ",
        )
        .bind(&draft.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: Uuid, patch: &TodoPatch) -> Result<Uuid, RepositoryError> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            r"
            UPDATE todos
            SET content = COALESCE($2, content), updated_at = NOW()
            WHERE id = $1
            RETURNING id
            ",
        )
        .bind(id)
        .bind(&patch.content)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM todos
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
