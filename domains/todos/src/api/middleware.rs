//! Todos domain state and auth backend integration

use axum::extract::FromRef;
use easel_auth::AuthBackend;
use std::sync::Arc;

use crate::repository::TodoRepository;

/// Application state for the Todos domain
#[derive(Clone)]
pub struct TodosState {
    pub repo: Arc<dyn TodoRepository>,
    pub auth: AuthBackend,
}

impl FromRef<TodosState> for AuthBackend {
    fn from_ref(state: &TodosState) -> Self {
        state.auth.clone()
    }
}
