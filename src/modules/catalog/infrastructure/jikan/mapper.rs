use super::dto::{
    JikanAnimeData, JikanAnimeListResponse, JikanImageUrls, JikanImages, JikanRecommendation,
};
use crate::modules::catalog::domain::{
    CatalogEntry, CatalogImageSet, CatalogImages, CatalogPage, CatalogPagination,
    CatalogRecommendation,
};

/// Converts Jikan wire types to catalog domain types.
pub struct JikanMapper;

impl JikanMapper {
    pub fn to_entry(data: JikanAnimeData) -> CatalogEntry {
        CatalogEntry {
            catalog_id: data.mal_id,
            url: data.url,
            title: data.title,
            title_english: data.title_english,
            title_japanese: data.title_japanese,
            title_synonyms: data.title_synonyms,
            images: Self::to_images(data.images),
            trailer_url: data.trailer.and_then(|t| t.url),
            airing_status: data.status,
            episodes: data.episodes,
            score: data.score,
            synopsis: data.synopsis,
            season: data.season,
            year: data.year,
            genres: data.genres.into_iter().map(|g| g.name).collect(),
            studios: data.studios.into_iter().map(|s| s.name).collect(),
        }
    }

    pub fn to_page(response: JikanAnimeListResponse) -> CatalogPage {
        let pagination = response
            .pagination
            .map(|p| CatalogPagination {
                last_visible_page: p.last_visible_page,
                has_next_page: p.has_next_page,
            })
            .unwrap_or_default();

        CatalogPage {
            entries: response.data.into_iter().map(Self::to_entry).collect(),
            pagination,
        }
    }

    pub fn to_recommendation(rec: JikanRecommendation) -> CatalogRecommendation {
        let images = Self::to_images(rec.entry.images);
        CatalogRecommendation {
            catalog_id: rec.entry.mal_id,
            title: rec.entry.title,
            image_url: images
                .jpg
                .large_image_url
                .or(images.jpg.image_url)
                .or(images.webp.large_image_url)
                .or(images.webp.image_url),
            votes: rec.votes,
        }
    }

    fn to_images(images: JikanImages) -> CatalogImages {
        CatalogImages {
            jpg: Self::to_image_set(images.jpg),
            webp: Self::to_image_set(images.webp),
        }
    }

    fn to_image_set(urls: JikanImageUrls) -> CatalogImageSet {
        CatalogImageSet {
            image_url: urls.image_url,
            small_image_url: urls.small_image_url,
            large_image_url: urls.large_image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_FIXTURE: &str = r#"{
        "pagination": { "last_visible_page": 3, "has_next_page": true },
        "data": [{
            "mal_id": 1,
            "url": "https://myanimelist.net/anime/1/Cowboy_Bebop",
            "images": {
                "jpg": {
                    "image_url": "https://cdn.myanimelist.net/images/anime/4/19644.jpg",
                    "small_image_url": "https://cdn.myanimelist.net/images/anime/4/19644t.jpg",
                    "large_image_url": "https://cdn.myanimelist.net/images/anime/4/19644l.jpg"
                },
                "webp": {
                    "image_url": "https://cdn.myanimelist.net/images/anime/4/19644.webp",
                    "small_image_url": null,
                    "large_image_url": "https://cdn.myanimelist.net/images/anime/4/19644l.webp"
                }
            },
            "trailer": { "youtube_id": "qig4KOK2R2g", "url": "https://www.youtube.com/watch?v=qig4KOK2R2g", "embed_url": null },
            "titles": [{ "type": "Default", "title": "Cowboy Bebop" }],
            "title": "Cowboy Bebop",
            "title_english": "Cowboy Bebop",
            "title_japanese": "カウボーイビバップ",
            "title_synonyms": [],
            "type": "TV",
            "episodes": 26,
            "status": "Finished Airing",
            "airing": false,
            "score": 8.75,
            "synopsis": "Crime is timeless.",
            "season": "spring",
            "year": 1998,
            "genres": [
                { "mal_id": 1, "type": "anime", "name": "Action", "url": "https://myanimelist.net/anime/genre/1/Action" }
            ],
            "studios": [
                { "mal_id": 14, "type": "anime", "name": "Sunrise", "url": "https://myanimelist.net/anime/producer/14/Sunrise" }
            ]
        }]
    }"#;

    #[test]
    fn maps_search_page() {
        let response: JikanAnimeListResponse = serde_json::from_str(SEARCH_FIXTURE).unwrap();
        let page = JikanMapper::to_page(response);

        assert_eq!(page.pagination.last_visible_page, 3);
        assert!(page.pagination.has_next_page);
        assert_eq!(page.entries.len(), 1);

        let entry = &page.entries[0];
        assert_eq!(entry.catalog_id, 1);
        assert_eq!(entry.title, "Cowboy Bebop");
        assert_eq!(entry.episodes, Some(26));
        assert_eq!(entry.genres, vec!["Action".to_string()]);
        assert_eq!(entry.studios, vec!["Sunrise".to_string()]);
        assert_eq!(
            entry.trailer_url.as_deref(),
            Some("https://www.youtube.com/watch?v=qig4KOK2R2g")
        );
    }

    #[test]
    fn poster_prefers_large_jpg() {
        let response: JikanAnimeListResponse = serde_json::from_str(SEARCH_FIXTURE).unwrap();
        let page = JikanMapper::to_page(response);

        assert_eq!(
            page.entries[0].preferred_image_url(),
            Some("https://cdn.myanimelist.net/images/anime/4/19644l.jpg")
        );
    }

    #[test]
    fn poster_falls_back_to_webp() {
        let mut response: JikanAnimeListResponse = serde_json::from_str(SEARCH_FIXTURE).unwrap();
        response.data[0].images.jpg = Default::default();
        let entry = JikanMapper::to_entry(response.data.remove(0));

        assert_eq!(
            entry.preferred_image_url(),
            Some("https://cdn.myanimelist.net/images/anime/4/19644l.webp")
        );
    }

    #[test]
    fn missing_pagination_defaults_to_single_page() {
        let response: JikanAnimeListResponse =
            serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        let page = JikanMapper::to_page(response);

        assert_eq!(page.pagination.last_visible_page, 0);
        assert!(!page.pagination.has_next_page);
    }

    #[test]
    fn parses_error_payload() {
        let error: super::super::dto::JikanErrorResponse = serde_json::from_str(
            r#"{ "status": 404, "type": "HttpException", "message": "Resource does not exist", "error": null }"#,
        )
        .unwrap();

        assert_eq!(error.status, Some(404));
        assert_eq!(error.message.as_deref(), Some("Resource does not exist"));
    }
}
