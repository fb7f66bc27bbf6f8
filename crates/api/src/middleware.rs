//! Passthrough surface state

use std::sync::Arc;

use easel_catalog::ArtCatalog;
use easel_users::UserDirectory;

/// Application state for the passthrough routes
#[derive(Clone)]
pub struct ApiState {
    pub users: Arc<dyn UserDirectory>,
    pub catalog: Arc<dyn ArtCatalog>,
}
