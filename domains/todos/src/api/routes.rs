//! Route definitions for the Todos domain API

use axum::{routing::get, Router};

use super::handlers::todos;
use super::middleware::TodosState;

/// Create all Todos domain API routes
pub fn routes() -> Router<TodosState> {
    Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{todoId}",
            get(todos::get_todo)
                .patch(todos::update_todo)
                .delete(todos::delete_todo),
        )
}
