//! Wire types mirroring the Jikan v4 JSON schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeResponse {
    pub data: JikanAnimeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeListResponse {
    pub data: Vec<JikanAnimeData>,
    pub pagination: Option<JikanPagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanPagination {
    pub last_visible_page: i32,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnimeData {
    pub mal_id: i32,
    pub url: String,
    pub images: JikanImages,
    pub trailer: Option<JikanTrailer>,
    #[serde(default)]
    pub titles: Vec<JikanTitle>,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub title_synonyms: Vec<String>,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub episodes: Option<i32>,
    pub status: Option<String>,
    #[serde(default)]
    pub airing: bool,
    pub score: Option<f32>,
    pub synopsis: Option<String>,
    pub season: Option<String>,
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<JikanEntity>,
    #[serde(default)]
    pub studios: Vec<JikanEntity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanImages {
    pub jpg: JikanImageUrls,
    pub webp: JikanImageUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JikanImageUrls {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanTrailer {
    pub youtube_id: Option<String>,
    pub url: Option<String>,
    pub embed_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanTitle {
    #[serde(rename = "type")]
    pub title_type: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanEntity {
    pub mal_id: i32,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanRecommendationsResponse {
    pub data: Vec<JikanRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanRecommendation {
    pub entry: JikanRecommendationEntry,
    pub url: Option<String>,
    #[serde(default)]
    pub votes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanRecommendationEntry {
    pub mal_id: i32,
    pub url: String,
    pub images: JikanImages,
    pub title: String,
}

/// Error payload Jikan sends on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanErrorResponse {
    pub status: Option<i32>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Query parameters for `GET /anime`.
#[derive(Debug, Clone, Serialize)]
pub struct JikanSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl Default for JikanSearchParams {
    fn default() -> Self {
        Self {
            q: None,
            page: None,
            limit: Some(25),
            sfw: Some(true),
            order_by: Some("rank".to_string()),
        }
    }
}
