/// Remote catalog module
///
/// Read-only view of the external anime catalog (Jikan v4). Everything
/// fetched here is a snapshot: nothing is ever written back, and nothing
/// is persisted unless the user tracks a title.
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{
    CatalogEntry, CatalogImageSet, CatalogImages, CatalogPage, CatalogPagination,
    CatalogRecommendation,
};
pub use infrastructure::jikan::{CatalogClient, JikanSearchParams};
