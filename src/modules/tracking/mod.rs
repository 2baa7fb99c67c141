/// Personal watch-list module
///
/// Everything between the catalog and the local list: the tracked-entry
/// store (SQLite, reactive queries) and the list manager that merges
/// catalog snapshots with stored annotations.
///
/// Architecture:
/// - Domain: entity, status enum, change events and the repository trait
/// - Infrastructure: Diesel-based repository with live-query support
/// - Application: `ListService`, the merge-safe write/read facade
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::ListService;
pub use domain::{
    CountWatch, EntryChange, EntryWatch, ListWatch, TrackedEntry, TrackedEntryRepository,
    WatchStatus,
};
pub use infrastructure::TrackedEntryRepositoryImpl;
