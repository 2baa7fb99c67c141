pub mod client;
pub mod dto;
pub mod mapper;

pub use client::CatalogClient;
pub use dto::JikanSearchParams;
