/// Diesel models for the tracked_entries table
use diesel::prelude::*;

use crate::modules::tracking::domain::{TrackedEntry, WatchStatus};
use crate::schema::tracked_entries;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = tracked_entries)]
pub struct TrackedEntryRow {
    pub catalog_id: i32,
    pub title: String,
    pub image_url: Option<String>,
    pub status: WatchStatus,
    pub user_score: Option<i32>,
    pub episodes_watched: Option<i32>,
    pub last_modified: i64,
}

impl TrackedEntryRow {
    pub fn from_entity(entry: &TrackedEntry) -> Self {
        Self {
            catalog_id: entry.catalog_id,
            title: entry.title.clone(),
            image_url: entry.image_url.clone(),
            status: entry.status,
            user_score: entry.user_score,
            episodes_watched: entry.episodes_watched,
            last_modified: entry.last_modified,
        }
    }

    pub fn into_entity(self) -> TrackedEntry {
        TrackedEntry {
            catalog_id: self.catalog_id,
            title: self.title,
            image_url: self.image_url,
            status: self.status,
            user_score: self.user_score,
            episodes_watched: self.episodes_watched,
            last_modified: self.last_modified,
        }
    }
}
