//! Catalog snapshot types.

use serde::{Deserialize, Serialize};

/// One title as fetched from the catalog. Read-only input to the tracking
/// layer; never persisted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub catalog_id: i32,
    pub url: String,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    pub title_synonyms: Vec<String>,
    pub images: CatalogImages,
    pub trailer_url: Option<String>,
    /// Airing status as reported by the catalog ("Currently Airing", ...).
    pub airing_status: Option<String>,
    pub episodes: Option<i32>,
    /// Community score, 0.0-10.0.
    pub score: Option<f32>,
    pub synopsis: Option<String>,
    pub season: Option<String>,
    pub year: Option<i32>,
    pub genres: Vec<String>,
    pub studios: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogImages {
    pub jpg: CatalogImageSet,
    pub webp: CatalogImageSet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogImageSet {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

impl CatalogEntry {
    /// Best-available poster: large jpg, then jpg, then the webp fallbacks.
    pub fn preferred_image_url(&self) -> Option<&str> {
        self.images
            .jpg
            .large_image_url
            .as_deref()
            .or(self.images.jpg.image_url.as_deref())
            .or(self.images.webp.large_image_url.as_deref())
            .or(self.images.webp.image_url.as_deref())
    }
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub entries: Vec<CatalogEntry>,
    pub pagination: CatalogPagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPagination {
    pub last_visible_page: i32,
    pub has_next_page: bool,
}

/// A community recommendation attached to a title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecommendation {
    pub catalog_id: i32,
    pub title: String,
    pub image_url: Option<String>,
    pub votes: i32,
}
