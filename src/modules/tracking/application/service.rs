use std::sync::Arc;

use crate::modules::catalog::CatalogEntry;
use crate::modules::tracking::domain::{
    CountWatch, EntryWatch, ListWatch, TrackedEntry, TrackedEntryRepository, WatchStatus,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// The list manager: bridges remote catalog data with local annotations.
///
/// Writes are merge-safe: a catalog snapshot is combined with the stored
/// row so unspecified fields survive, then written as one upsert.
pub struct ListService {
    repo: Arc<dyn TrackedEntryRepository>,
}

impl ListService {
    pub fn new(repo: Arc<dyn TrackedEntryRepository>) -> Self {
        Self { repo }
    }

    /// Track a catalog title, or update the tracked copy.
    ///
    /// Title and image refresh to the fetched values; a `None` score keeps
    /// whatever score is already stored. At-most-once: one point read, one
    /// upsert, no history.
    pub async fn track_or_update(
        &self,
        item: &CatalogEntry,
        status: WatchStatus,
        score: Option<i32>,
    ) -> AppResult<TrackedEntry> {
        Self::validate_status(status)?;
        if let Some(score) = score {
            Validator::validate_user_score(score)?;
        }

        let existing = self.repo.get_by_id_once(item.catalog_id).await?;
        let entry = TrackedEntry::merged(item, status, score, existing.as_ref());

        self.repo.upsert(entry.clone()).await?;
        log_info!(
            "Tracked '{}' ({}) as {}",
            entry.title,
            entry.catalog_id,
            entry.status.display_name()
        );

        Ok(entry)
    }

    /// Start tracking with the default status and no score.
    pub async fn track(&self, item: &CatalogEntry) -> AppResult<TrackedEntry> {
        self.track_or_update(item, WatchStatus::Watching, None).await
    }

    /// Move an entry to a new status. The store writes status and score
    /// together, so the caller passes the score it currently knows.
    pub async fn change_status(
        &self,
        catalog_id: i32,
        new_status: WatchStatus,
        current_score: Option<i32>,
    ) -> AppResult<()> {
        Self::validate_status(new_status)?;
        self.repo
            .update_status_and_score(catalog_id, new_status, current_score)
            .await
    }

    /// Re-score an entry, passing through the caller's current status.
    pub async fn change_score(
        &self,
        catalog_id: i32,
        current_status: WatchStatus,
        new_score: Option<i32>,
    ) -> AppResult<()> {
        Self::validate_status(current_status)?;
        if let Some(score) = new_score {
            Validator::validate_user_score(score)?;
        }
        self.repo
            .update_status_and_score(catalog_id, current_status, new_score)
            .await
    }

    pub async fn untrack(&self, catalog_id: i32) -> AppResult<()> {
        log_debug!("Untracking entry {}", catalog_id);
        self.repo.delete_by_id(catalog_id).await
    }

    /// Current stored state for one title, if tracked.
    pub async fn entry_once(&self, catalog_id: i32) -> AppResult<Option<TrackedEntry>> {
        self.repo.get_by_id_once(catalog_id).await
    }

    // Read side: live queries forwarded to the store.

    pub fn entry(&self, catalog_id: i32) -> EntryWatch {
        self.repo.watch_by_id(catalog_id)
    }

    pub fn watching(&self) -> ListWatch {
        self.repo.watch_by_status(WatchStatus::Watching)
    }

    pub fn plan_to_watch(&self) -> ListWatch {
        self.repo.watch_by_status(WatchStatus::PlanToWatch)
    }

    pub fn completed(&self) -> ListWatch {
        self.repo.watch_by_status(WatchStatus::Completed)
    }

    pub fn on_hold(&self) -> ListWatch {
        self.repo.watch_by_status(WatchStatus::OnHold)
    }

    pub fn dropped(&self) -> ListWatch {
        self.repo.watch_by_status(WatchStatus::Dropped)
    }

    pub fn all(&self) -> ListWatch {
        self.repo.watch_all()
    }

    pub fn count_for(&self, status: WatchStatus) -> CountWatch {
        self.repo.watch_count_by_status(status)
    }

    fn validate_status(status: WatchStatus) -> AppResult<()> {
        if !status.is_tracked() {
            return Err(AppError::ValidationError(
                "An untracked status cannot be persisted".to_string(),
            ));
        }
        Ok(())
    }
}
