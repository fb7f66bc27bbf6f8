//! Art-catalog read-through handlers

use axum::{
    extract::{Path, State},
    Json,
};
use easel_catalog::{image_url, ArtworkFields, ImageSize};
use easel_common::{Error, Result};
use serde::Serialize;
use serde_json::Value;

use crate::middleware::ApiState;

/// Display image URLs derived for one artwork
#[derive(Debug, Serialize)]
pub struct ArtworkImages {
    pub full: String,
    pub small: String,
}

/// Response for a single-artwork lookup
#[derive(Debug, Serialize)]
pub struct ArtworkResponse {
    pub id: i64,
    pub title: String,
    pub images: ArtworkImages,
}

impl ArtworkResponse {
    fn from_fields(fields: ArtworkFields) -> Self {
        Self {
            id: fields.id,
            title: fields.title,
            images: ArtworkImages {
                full: image_url(&fields.image_id, ImageSize::Full),
                small: image_url(&fields.image_id, ImageSize::Small),
            },
        }
    }
}

/// List catalog artworks
///
/// **GET /artwork**
///
/// The catalog listing is passed through verbatim.
pub async fn list_artwork(State(state): State<ApiState>) -> Result<Json<Value>> {
    let listing = state.catalog.list_artworks().await.map_err(|e| {
        tracing::error!(error = %e, "Catalog listing call failed");
        Error::Upstream(e.to_string())
    })?;

    Ok(Json(listing))
}

/// Get one artwork with derived image URLs
///
/// **GET /artwork/{id}**
pub async fn get_artwork(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<ArtworkResponse>> {
    let fields = state.catalog.artwork_fields(&id).await.map_err(|e| {
        tracing::error!(error = %e, artwork_id = %id, "Catalog lookup failed");
        Error::Upstream(e.to_string())
    })?;

    let response = ArtworkResponse::from_fields(fields);
    tracing::info!(artwork_id = response.id, "Artwork proxied");

    Ok(Json(response))
}
