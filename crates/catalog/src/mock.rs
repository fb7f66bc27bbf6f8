//! Mock art catalog for testing

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::{ArtCatalog, ArtworkFields, CatalogError};

/// Mock catalog serving canned artwork records
#[derive(Debug, Default)]
pub struct MockArtCatalog {
    artworks: HashMap<String, ArtworkFields>,
}

impl MockArtCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned artwork record
    pub fn with_artwork(mut self, fields: ArtworkFields) -> Self {
        self.artworks.insert(fields.id.to_string(), fields);
        self
    }
}

#[async_trait::async_trait]
impl ArtCatalog for MockArtCatalog {
    async fn list_artworks(&self) -> Result<Value, CatalogError> {
        let mut data: Vec<&ArtworkFields> = self.artworks.values().collect();
        data.sort_by_key(|fields| fields.id);
        Ok(json!({ "data": data }))
    }

    async fn artwork_fields(&self, id: &str) -> Result<ArtworkFields, CatalogError> {
        self.artworks.get(id).cloned().ok_or_else(|| {
            CatalogError::Response(format!("Catalog API returned 404: no artwork {}", id))
        })
    }
}
