//! Art Institute catalog HTTP client

use serde::Deserialize;
use serde_json::Value;

use crate::{ArtCatalog, ArtworkFields, CatalogConfig, CatalogError};

/// Field projection requested for single-artwork lookups
const ARTWORK_FIELDS: &str = "id,title,image_id";

/// Envelope wrapping catalog API payloads
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

/// Real HTTP client for the Art Institute catalog API
pub struct ArticClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArticClient {
    /// Create a new client from configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Configuration(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(CatalogError::Response(format!(
                "Catalog API returned {}: {}",
                status, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Response(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ArtCatalog for ArticClient {
    async fn list_artworks(&self) -> Result<Value, CatalogError> {
        let url = format!("{}/artworks", self.base_url);
        let listing: Value = self.get_json(&url).await?;

        let count = listing
            .get("data")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        tracing::info!(count, "Catalog listing fetched");

        Ok(listing)
    }

    async fn artwork_fields(&self, id: &str) -> Result<ArtworkFields, CatalogError> {
        let url = format!("{}/artworks/{}?fields={}", self.base_url, id, ARTWORK_FIELDS);
        let envelope: ApiEnvelope<ArtworkFields> = self.get_json(&url).await?;

        tracing::debug!(artwork_id = envelope.data.id, "Artwork fields fetched");
        Ok(envelope.data)
    }
}
