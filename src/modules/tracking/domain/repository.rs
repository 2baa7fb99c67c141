/// Repository trait for the local list store
///
/// Durable keyed storage of tracked entries with reactive read access.
/// Implementation uses Diesel over SQLite.
use async_trait::async_trait;

use super::entities::{TrackedEntry, WatchStatus};
use super::events::EntryChange;
use crate::shared::errors::AppResult;
use crate::shared::live::LiveQuery;

/// Live lookup of a single entry.
pub type EntryWatch = LiveQuery<Option<TrackedEntry>, EntryChange>;
/// Live list of entries, ordered by title ascending.
pub type ListWatch = LiveQuery<Vec<TrackedEntry>, EntryChange>;
/// Live row count.
pub type CountWatch = LiveQuery<i64, EntryChange>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackedEntryRepository: Send + Sync {
    /// Insert a new entry or fully replace the row with the same catalog id
    async fn upsert(&self, entry: TrackedEntry) -> AppResult<()>;

    /// Point read, used to fetch current state before merging
    async fn get_by_id_once(&self, catalog_id: i32) -> AppResult<Option<TrackedEntry>>;

    /// Partial update of exactly status and score, refreshing the
    /// modification stamp. A missing row is a no-op.
    async fn update_status_and_score(
        &self,
        catalog_id: i32,
        new_status: WatchStatus,
        new_score: Option<i32>,
    ) -> AppResult<()>;

    /// Remove the row if present (idempotent)
    async fn delete_by_id(&self, catalog_id: i32) -> AppResult<()>;

    /// Live subscription to one entry
    fn watch_by_id(&self, catalog_id: i32) -> EntryWatch;

    /// Live subscription to all entries with the given status
    fn watch_by_status(&self, status: WatchStatus) -> ListWatch;

    /// Live count of entries with the given status
    fn watch_count_by_status(&self, status: WatchStatus) -> CountWatch;

    /// Live subscription to the whole list
    fn watch_all(&self) -> ListWatch;
}
