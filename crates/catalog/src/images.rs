//! IIIF image URL derivation
//!
//! The catalog serves images through a IIIF endpoint; display URLs are
//! derived from the record's `image_id` and a named size from a fixed table.

use serde::{Deserialize, Serialize};

/// IIIF image service base URL
const IIIF_BASE: &str = "https://www.artic.edu/iiif/2";

/// Named display sizes with their pixel widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Full,
    Small,
}

impl ImageSize {
    /// Pixel width for this size
    pub fn width(self) -> u32 {
        match self {
            ImageSize::Full => 848,
            ImageSize::Small => 150,
        }
    }
}

/// Build the display URL for an image at the given size
pub fn image_url(image_id: &str, size: ImageSize) -> String {
    format!(
        "{}/{}/full/{},/0/default.jpg",
        IIIF_BASE,
        image_id,
        size.width()
    )
}
