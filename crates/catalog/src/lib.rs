//! Easel art-catalog client
//!
//! Read-only access to the public Art Institute of Chicago API:
//! - Catalog listings are passed through verbatim
//! - Single-artwork lookups request a field projection (`id,title,image_id`)
//!   and derive display image URLs from the IIIF image service
//!
//! One outbound request per call, no retry, no caching.

pub mod client;
pub mod images;
pub mod mock;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub use client::ArticClient;
pub use images::{image_url, ImageSize};
pub use mock::MockArtCatalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog configuration error: {0}")]
    Configuration(String),

    #[error("Catalog request error: {0}")]
    Request(String),

    #[error("Catalog response error: {0}")]
    Response(String),
}

/// Catalog client configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API
    pub base_url: String,
    /// Request timeout for catalog calls
    pub timeout: Duration,
}

/// Projected fields of a single artwork record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkFields {
    pub id: i64,
    pub title: String,
    /// IIIF image identifier; the catalog omits it for some records
    #[serde(default)]
    pub image_id: String,
}

/// Art catalog seam for different backends
#[async_trait::async_trait]
pub trait ArtCatalog: Send + Sync {
    /// Fetch the catalog listing; the body is passed through verbatim.
    async fn list_artworks(&self) -> Result<serde_json::Value, CatalogError>;

    /// Fetch one artwork's projected fields by id.
    async fn artwork_fields(&self, id: &str) -> Result<ArtworkFields, CatalogError>;
}
