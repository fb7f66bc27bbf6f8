//! Route definitions for the passthrough surface

use axum::{routing::get, Router};

use crate::handlers::{artwork, ping, users};
use crate::middleware::ApiState;

/// Create all passthrough routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/ping", get(ping::ping))
        .route("/users/{id}", get(users::get_user))
        .route("/artwork", get(artwork::list_artwork))
        .route("/artwork/{id}", get(artwork::get_artwork))
}
