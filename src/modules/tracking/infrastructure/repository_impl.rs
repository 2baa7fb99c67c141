use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tokio::task;

use super::models::TrackedEntryRow;
use crate::log_debug;
use crate::modules::tracking::domain::{
    CountWatch, EntryChange, EntryWatch, ListWatch, TrackedEntry, TrackedEntryRepository,
    WatchStatus,
};
use crate::schema::tracked_entries;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::live::{ChangeBus, LiveQuery};
use crate::shared::Database;

pub struct TrackedEntryRepositoryImpl {
    db: Arc<Database>,
    changes: ChangeBus<EntryChange>,
}

impl TrackedEntryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            changes: ChangeBus::default(),
        }
    }

    /// Run a storage closure on the blocking pool.
    async fn with_conn<T, F>(&self, op: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> AppResult<T> + Send + 'static,
    {
        let pool = self.db.pool().clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(AppError::from)?;
            op(&mut conn)
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Storage task failed: {}", e)))?
    }
}

#[async_trait]
impl TrackedEntryRepository for TrackedEntryRepositoryImpl {
    async fn upsert(&self, entry: TrackedEntry) -> AppResult<()> {
        let row = TrackedEntryRow::from_entity(&entry);

        let change = self
            .with_conn(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    let previous: Option<WatchStatus> = tracked_entries::table
                        .find(row.catalog_id)
                        .select(tracked_entries::status)
                        .first(conn)
                        .optional()?;

                    diesel::replace_into(tracked_entries::table)
                        .values(&row)
                        .execute(conn)?;

                    Ok(EntryChange::upserted(row.catalog_id, previous, row.status))
                })
            })
            .await?;

        log_debug!("Upserted tracked entry {}", entry.catalog_id);
        self.changes.publish(change);
        Ok(())
    }

    async fn get_by_id_once(&self, catalog_id: i32) -> AppResult<Option<TrackedEntry>> {
        self.with_conn(move |conn| {
            let found: Option<TrackedEntryRow> = tracked_entries::table
                .find(catalog_id)
                .first(conn)
                .optional()?;
            Ok(found.map(TrackedEntryRow::into_entity))
        })
        .await
    }

    async fn update_status_and_score(
        &self,
        catalog_id: i32,
        new_status: WatchStatus,
        new_score: Option<i32>,
    ) -> AppResult<()> {
        let now = Utc::now().timestamp_millis();

        let change = self
            .with_conn(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    let previous: Option<WatchStatus> = tracked_entries::table
                        .find(catalog_id)
                        .select(tracked_entries::status)
                        .first(conn)
                        .optional()?;

                    // Missing row is a no-op, not an error.
                    let Some(previous) = previous else {
                        return Ok(None);
                    };

                    diesel::update(tracked_entries::table.find(catalog_id))
                        .set((
                            tracked_entries::status.eq(new_status),
                            tracked_entries::user_score.eq(new_score),
                            tracked_entries::last_modified.eq(now),
                        ))
                        .execute(conn)?;

                    Ok(Some(EntryChange::updated(catalog_id, previous, new_status)))
                })
            })
            .await?;

        if let Some(change) = change {
            self.changes.publish(change);
        }
        Ok(())
    }

    async fn delete_by_id(&self, catalog_id: i32) -> AppResult<()> {
        let change = self
            .with_conn(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    let previous: Option<WatchStatus> = tracked_entries::table
                        .find(catalog_id)
                        .select(tracked_entries::status)
                        .first(conn)
                        .optional()?;

                    let Some(previous) = previous else {
                        return Ok(None);
                    };

                    diesel::delete(tracked_entries::table.find(catalog_id)).execute(conn)?;

                    Ok(Some(EntryChange::deleted(catalog_id, previous)))
                })
            })
            .await?;

        if let Some(change) = change {
            log_debug!("Deleted tracked entry {}", catalog_id);
            self.changes.publish(change);
        }
        Ok(())
    }

    fn watch_by_id(&self, catalog_id: i32) -> EntryWatch {
        LiveQuery::new(
            self.db.pool().clone(),
            self.changes.subscribe(),
            move |conn| {
                let found: Option<TrackedEntryRow> = tracked_entries::table
                    .find(catalog_id)
                    .first(conn)
                    .optional()
                    .map_err(AppError::from)?;
                Ok(found.map(TrackedEntryRow::into_entity))
            },
            move |change| change.catalog_id == catalog_id,
        )
    }

    fn watch_by_status(&self, status: WatchStatus) -> ListWatch {
        LiveQuery::new(
            self.db.pool().clone(),
            self.changes.subscribe(),
            move |conn| {
                let rows: Vec<TrackedEntryRow> = tracked_entries::table
                    .filter(tracked_entries::status.eq(status))
                    .order(tracked_entries::title.asc())
                    .load(conn)
                    .map_err(AppError::from)?;
                Ok(rows.into_iter().map(TrackedEntryRow::into_entity).collect())
            },
            move |change| change.touches(status),
        )
    }

    fn watch_count_by_status(&self, status: WatchStatus) -> CountWatch {
        LiveQuery::new(
            self.db.pool().clone(),
            self.changes.subscribe(),
            move |conn| {
                tracked_entries::table
                    .filter(tracked_entries::status.eq(status))
                    .count()
                    .get_result(conn)
                    .map_err(AppError::from)
            },
            move |change| change.touches(status),
        )
    }

    fn watch_all(&self) -> ListWatch {
        LiveQuery::new(
            self.db.pool().clone(),
            self.changes.subscribe(),
            move |conn| {
                let rows: Vec<TrackedEntryRow> = tracked_entries::table
                    .order(tracked_entries::title.asc())
                    .load(conn)
                    .map_err(AppError::from)?;
                Ok(rows.into_iter().map(TrackedEntryRow::into_entity).collect())
            },
            |_| true,
        )
    }
}
