//! Row-change events published by the store.

use super::entities::WatchStatus;

/// A change to one tracked entry, carrying the status partitions it touched.
///
/// A status move touches both the old and the new partition; a delete
/// touches the partition the row was in.
#[derive(Debug, Clone)]
pub struct EntryChange {
    pub catalog_id: i32,
    statuses: Vec<WatchStatus>,
}

impl EntryChange {
    pub fn upserted(catalog_id: i32, previous: Option<WatchStatus>, current: WatchStatus) -> Self {
        let mut statuses = vec![current];
        if let Some(previous) = previous {
            if previous != current {
                statuses.push(previous);
            }
        }
        Self {
            catalog_id,
            statuses,
        }
    }

    pub fn updated(catalog_id: i32, previous: WatchStatus, current: WatchStatus) -> Self {
        Self::upserted(catalog_id, Some(previous), current)
    }

    pub fn deleted(catalog_id: i32, previous: WatchStatus) -> Self {
        Self {
            catalog_id,
            statuses: vec![previous],
        }
    }

    pub fn touches(&self, status: WatchStatus) -> bool {
        self.statuses.contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_move_touches_both_partitions() {
        let change = EntryChange::updated(1, WatchStatus::Watching, WatchStatus::Completed);
        assert!(change.touches(WatchStatus::Watching));
        assert!(change.touches(WatchStatus::Completed));
        assert!(!change.touches(WatchStatus::Dropped));
    }

    #[test]
    fn same_status_upsert_lists_partition_once() {
        let change = EntryChange::upserted(1, Some(WatchStatus::Watching), WatchStatus::Watching);
        assert!(change.touches(WatchStatus::Watching));
    }
}
