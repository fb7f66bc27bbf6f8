//! Todo CRUD handlers
//!
//! Body validation runs as an extractor before the handler; existence checks
//! are repository lookups inside the handler. The first failing check becomes
//! the response.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use easel_auth::AuthUser;
use easel_common::{Error, RepositoryError, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::TodosState;
use crate::domain::entities::{Todo, TodoDraft, TodoPatch};
use crate::repository::TodoFilter;

/// Request for creating a todo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, message = "should be a non-empty string"))]
    pub content: String,
}

/// Request for updating a todo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, message = "should be a non-empty string"))]
    pub content: Option<String>,
}

/// Response for todo deletion
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub deleted: bool,
}

/// List todos
///
/// **GET /todos**
pub async fn list_todos(State(state): State<TodosState>) -> Result<Json<Vec<Todo>>> {
    tracing::info!("Getting todos");

    let todos = state.repo.find(&TodoFilter::default()).await?;
    Ok(Json(todos))
}

/// Create a todo
///
/// **POST /todos**
///
/// The draft has already passed body validation when the handler runs. The
/// repository returns only the new id; the created record is fetched back for
/// the response.
pub async fn create_todo(
    AuthUser(user): AuthUser,
    State(state): State<TodosState>,
    ValidatedJson(request): ValidatedJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>)> {
    tracing::info!(user_id = %user.user_id, "Creating todo");

    let draft = TodoDraft {
        content: request.content,
    };
    let id = state.repo.create(&draft).await?;

    let todo = state
        .repo
        .find_one(id)
        .await?
        .ok_or_else(|| Error::Internal(format!("Todo {} missing after create", id)))?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Get a todo by id
///
/// **GET /todos/{todoId}**
pub async fn get_todo(
    State(state): State<TodosState>,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<Todo>> {
    tracing::info!(%todo_id, "Getting todo by id");

    let todo = state
        .repo
        .find_one(todo_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Todo {} not found", todo_id)))?;

    Ok(Json(todo))
}

/// Update a todo
///
/// **PATCH /todos/{todoId}**
///
/// Merges the given fields into the stored record and returns the re-fetched
/// result; the identifier is immutable.
pub async fn update_todo(
    AuthUser(user): AuthUser,
    State(state): State<TodosState>,
    Path(todo_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateTodoRequest>,
) -> Result<Json<Todo>> {
    tracing::info!(user_id = %user.user_id, %todo_id, "Updating todo by id");

    let patch = TodoPatch {
        content: request.content,
    };
    let id = state.repo.update(todo_id, &patch).await.map_err(|e| match e {
        RepositoryError::NotFound => Error::NotFound(format!("Todo {} not found", todo_id)),
        other => other.into(),
    })?;

    let todo = state
        .repo
        .find_one(id)
        .await?
        .ok_or_else(|| Error::Internal(format!("Todo {} missing after update", id)))?;

    Ok(Json(todo))
}

/// Delete a todo
///
/// **DELETE /todos/{todoId}**
///
/// Deleting an absent record is not an error; the response reports whether a
/// record was actually removed.
pub async fn delete_todo(
    AuthUser(user): AuthUser,
    State(state): State<TodosState>,
    Path(todo_id): Path<Uuid>,
) -> Result<Json<DeleteTodoResponse>> {
    tracing::info!(user_id = %user.user_id, %todo_id, "Deleting todo by id");

    let deleted = state.repo.delete(todo_id).await?;
    Ok(Json(DeleteTodoResponse { deleted }))
}
