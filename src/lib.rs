//! mitai - anime watch-list core.
//!
//! A reactive local list store over SQLite, a merge-safe list manager, and
//! a Jikan catalog client for the presentation layer to build on.

pub mod modules;
mod schema;
pub mod shared;

pub use modules::catalog::{CatalogClient, CatalogEntry, CatalogPage, JikanSearchParams};
pub use modules::tracking::{
    ListService, TrackedEntry, TrackedEntryRepository, TrackedEntryRepositoryImpl, WatchStatus,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::Database;
