use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use tracing::debug;

use super::dto::{
    JikanAnimeListResponse, JikanAnimeResponse, JikanErrorResponse, JikanRecommendationsResponse,
    JikanSearchParams,
};
use super::mapper::JikanMapper;
use crate::modules::catalog::domain::{CatalogEntry, CatalogPage, CatalogRecommendation};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{RateLimiter, Validator};

const JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";
// Jikan hard limit per page.
const MAX_PAGE_SIZE: i32 = 25;

pub struct CatalogClient {
    client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter>,
}

impl CatalogClient {
    pub fn new() -> AppResult<Self> {
        Self::with_base_url(JIKAN_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("mitai/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            rate_limiter: Arc::new(RateLimiter::new(3.0)), // official Jikan limit
        })
    }

    /// Search the catalog by title with the default parameters
    /// (safe-for-work, rank order, full page).
    pub async fn search(&self, query: &str) -> AppResult<CatalogPage> {
        self.search_with(JikanSearchParams {
            q: Some(query.trim().to_string()),
            ..Default::default()
        })
        .await
    }

    pub async fn search_with(&self, mut params: JikanSearchParams) -> AppResult<CatalogPage> {
        Validator::validate_search_query(params.q.as_deref().unwrap_or(""))?;
        params.limit = Some(params.limit.unwrap_or(MAX_PAGE_SIZE).min(MAX_PAGE_SIZE));

        self.rate_limiter.wait().await?;

        let url = format!("{}/anime", self.base_url);
        debug!("Searching catalog: {:?}", params.q);

        let response = self.client.get(&url).query(&params).send().await?;
        let response = Self::check_status(response).await?;

        let body = response
            .json::<JikanAnimeListResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(JikanMapper::to_page(body))
    }

    /// Fetch one title by its catalog id. A 404 means the id does not
    /// exist and maps to `Ok(None)`.
    pub async fn get_by_id(&self, mal_id: i32) -> AppResult<Option<CatalogEntry>> {
        self.rate_limiter.wait().await?;

        let url = format!("{}/anime/{}", self.base_url, mal_id);
        let response = self.client.get(&url).send().await?;

        let response = match Self::check_status(response).await {
            Ok(response) => response,
            Err(AppError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let body = response
            .json::<JikanAnimeResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(Some(JikanMapper::to_entry(body.data)))
    }

    /// Community recommendations for one title.
    pub async fn recommendations(&self, mal_id: i32) -> AppResult<Vec<CatalogRecommendation>> {
        self.rate_limiter.wait().await?;

        let url = format!("{}/anime/{}/recommendations", self.base_url, mal_id);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let body = response
            .json::<JikanRecommendationsResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(body
            .data
            .into_iter()
            .map(JikanMapper::to_recommendation)
            .collect())
    }

    /// Split non-success responses into the error taxonomy: 404 and 429
    /// keep their own variants, everything else is a plain API error with
    /// whatever detail the error payload carries.
    async fn check_status(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<JikanErrorResponse>()
            .await
            .ok()
            .and_then(|e| e.message.or(e.error))
            .unwrap_or_else(|| status.to_string());

        Err(match status.as_u16() {
            404 => AppError::NotFound(detail),
            429 => AppError::RateLimitError(detail),
            _ => AppError::ApiError(format!("HTTP {}: {}", status.as_u16(), detail)),
        })
    }
}
