/// Builders for test fixtures
use mitai::modules::catalog::{CatalogImageSet, CatalogImages};
use mitai::{CatalogEntry, TrackedEntry, WatchStatus};

pub fn catalog_entry(id: i32, title: &str) -> CatalogEntry {
    CatalogEntry {
        catalog_id: id,
        url: format!("https://myanimelist.net/anime/{}", id),
        title: title.to_string(),
        title_english: None,
        title_japanese: None,
        title_synonyms: Vec::new(),
        images: CatalogImages {
            jpg: CatalogImageSet {
                image_url: Some(format!("https://cdn.example/{}.jpg", id)),
                small_image_url: None,
                large_image_url: Some(format!("https://cdn.example/{}l.jpg", id)),
            },
            webp: CatalogImageSet::default(),
        },
        trailer_url: None,
        airing_status: Some("Finished Airing".to_string()),
        episodes: Some(26),
        score: Some(8.7),
        synopsis: None,
        season: None,
        year: Some(1998),
        genres: Vec::new(),
        studios: Vec::new(),
    }
}

pub fn tracked_entry(id: i32, title: &str, status: WatchStatus) -> TrackedEntry {
    TrackedEntry {
        catalog_id: id,
        title: title.to_string(),
        image_url: None,
        status,
        user_score: None,
        episodes_watched: None,
        last_modified: 1,
    }
}
