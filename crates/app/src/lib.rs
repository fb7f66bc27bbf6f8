//! Easel application composition root
//!
//! Composes the passthrough surface and the Todos domain router into a single
//! application. Service handles are constructed here and injected into the
//! routers' state; lifecycle is owned by the process entry point, not by
//! module-level side effects.

use std::sync::Arc;

use axum::Router;
use easel_api::ApiState;
use easel_auth::{AuthBackend, AuthConfig, HttpTokenService, TokenService};
use easel_catalog::{ArtCatalog, ArticClient, CatalogConfig};
use easel_common::Config;
use easel_todos::{PgTodoRepository, TodoRepository, TodosState};
use easel_users::{client::HttpUserDirectory, UserDirectory, UserDirectoryConfig};
use sqlx::PgPool;

/// Service handles wired into the application routers
pub struct AppServices {
    pub todos: Arc<dyn TodoRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub users: Arc<dyn UserDirectory>,
    pub catalog: Arc<dyn ArtCatalog>,
}

impl AppServices {
    /// Build the production wiring: Postgres repository and HTTP clients,
    /// all sharing the configured upstream timeout.
    pub fn from_config(config: &Config, pool: PgPool) -> Result<Self, anyhow::Error> {
        let timeout = config.upstream_timeout();

        Ok(Self {
            todos: Arc::new(PgTodoRepository::new(pool)),
            tokens: Arc::new(HttpTokenService::new(AuthConfig::new(
                config.auth_endpoint.clone(),
                timeout,
            ))?),
            users: Arc::new(HttpUserDirectory::new(UserDirectoryConfig {
                base_url: config.user_endpoint.clone(),
                timeout,
            })?),
            catalog: Arc::new(ArticClient::new(CatalogConfig {
                base_url: config.catalog_endpoint.clone(),
                timeout,
            })?),
        })
    }
}

/// Create the main application router with all routes
pub fn create_app(services: AppServices) -> Router {
    let AppServices {
        todos,
        tokens,
        users,
        catalog,
    } = services;

    let todos_state = TodosState {
        repo: todos,
        auth: AuthBackend::new(tokens),
    };
    let api_state = ApiState { users, catalog };

    Router::new()
        .merge(easel_api::routes().with_state(api_state))
        .merge(easel_todos::routes().with_state(todos_state))
}
