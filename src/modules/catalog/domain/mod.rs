mod entry;

pub use entry::{
    CatalogEntry, CatalogImageSet, CatalogImages, CatalogPage, CatalogPagination,
    CatalogRecommendation,
};
