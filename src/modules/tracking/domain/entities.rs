//! Tracked entry entity and watch status.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::CatalogEntry;

/// User's watch status for a tracked title.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
pub enum WatchStatus {
    /// Currently watching
    Watching,
    /// Planning to watch
    PlanToWatch,
    /// Completed watching
    Completed,
    /// On hold/paused
    OnHold,
    /// Dropped
    Dropped,
    /// Not on any list. A presentation-side sentinel; write paths never
    /// persist it.
    None,
}

impl WatchStatus {
    /// The five statuses a stored entry can actually hold.
    pub const TRACKED: [WatchStatus; 5] = [
        WatchStatus::Watching,
        WatchStatus::PlanToWatch,
        WatchStatus::Completed,
        WatchStatus::OnHold,
        WatchStatus::Dropped,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Watching => "Watching",
            Self::PlanToWatch => "Plan to Watch",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::Dropped => "Dropped",
            Self::None => "No status",
        }
    }

    pub fn is_tracked(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// The locally persisted record of a user's relationship to a catalog title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEntry {
    /// Catalog id (MAL id); primary key, immutable once created.
    pub catalog_id: i32,
    pub title: String,
    pub image_url: Option<String>,
    pub status: WatchStatus,
    /// Personal score on the half-point scale: 0-10 stored, 0.0-5.0 shown.
    pub user_score: Option<i32>,
    pub episodes_watched: Option<i32>,
    /// Milliseconds since epoch, refreshed on every write.
    pub last_modified: i64,
}

impl TrackedEntry {
    /// Merge a catalog snapshot with whatever is already stored.
    ///
    /// Title and image always refresh to the latest fetched values; the
    /// score falls back to the stored one when the caller supplies none,
    /// and episode progress carries over untouched.
    pub fn merged(
        item: &CatalogEntry,
        status: WatchStatus,
        score: Option<i32>,
        existing: Option<&TrackedEntry>,
    ) -> Self {
        Self {
            catalog_id: item.catalog_id,
            title: item.title.clone(),
            image_url: item.preferred_image_url().map(str::to_owned),
            status,
            user_score: score.or_else(|| existing.and_then(|e| e.user_score)),
            episodes_watched: existing.and_then(|e| e.episodes_watched),
            last_modified: Utc::now().timestamp_millis(),
        }
    }

    /// Stored score expressed as 0.0-5.0 stars.
    pub fn star_rating(&self) -> Option<f32> {
        self.user_score.map(|s| s as f32 / 2.0)
    }

    pub fn score_display(&self) -> String {
        match self.star_rating() {
            Some(stars) => format!("{:.1} / 5", stars),
            None => "Not rated".to_string(),
        }
    }
}
