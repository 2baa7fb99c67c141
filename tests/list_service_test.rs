/// List manager tests - merge writes over a real store
///
/// Tests cover:
/// - Merge-safe track-or-update semantics
/// - Status/score wrappers
/// - Untrack
/// - Live accessors
mod utils;

use std::sync::Arc;

use mitai::modules::tracking::domain::TrackedEntryRepository;
use mitai::modules::tracking::TrackedEntryRepositoryImpl;
use mitai::{ListService, WatchStatus};
use utils::{db, factories};

fn service_with_repo() -> (ListService, Arc<TrackedEntryRepositoryImpl>) {
    let repo = Arc::new(TrackedEntryRepositoryImpl::new(db::open_test_db()));
    (ListService::new(repo.clone()), repo)
}

#[tokio::test]
async fn track_then_complete_scenario() {
    let (service, _) = service_with_repo();

    let tracked = service
        .track_or_update(&factories::catalog_entry(1, "Cowboy Bebop"), WatchStatus::Watching, None)
        .await
        .unwrap();
    assert_eq!(tracked.catalog_id, 1);
    assert_eq!(tracked.title, "Cowboy Bebop");
    assert_eq!(tracked.status, WatchStatus::Watching);
    assert_eq!(tracked.user_score, None);

    service
        .change_status(1, WatchStatus::Completed, Some(9))
        .await
        .unwrap();

    let stored = service.entry_once(1).await.unwrap().unwrap();
    assert_eq!(stored.status, WatchStatus::Completed);
    assert_eq!(stored.user_score, Some(9));
    assert_eq!(stored.title, "Cowboy Bebop");
}

#[tokio::test]
async fn status_only_update_preserves_score() {
    let (service, _) = service_with_repo();
    let item = factories::catalog_entry(1, "Cowboy Bebop");

    service
        .track_or_update(&item, WatchStatus::Watching, Some(7))
        .await
        .unwrap();
    service
        .track_or_update(&item, WatchStatus::Completed, None)
        .await
        .unwrap();

    let stored = service.entry_once(1).await.unwrap().unwrap();
    assert_eq!(stored.status, WatchStatus::Completed);
    assert_eq!(stored.user_score, Some(7));
}

#[tokio::test]
async fn merge_refreshes_title_and_image() {
    let (service, _) = service_with_repo();

    service
        .track_or_update(&factories::catalog_entry(1, "Cowbo Bebop"), WatchStatus::Watching, Some(8))
        .await
        .unwrap();
    service
        .track_or_update(&factories::catalog_entry(1, "Cowboy Bebop"), WatchStatus::Watching, None)
        .await
        .unwrap();

    let stored = service.entry_once(1).await.unwrap().unwrap();
    assert_eq!(stored.title, "Cowboy Bebop");
    assert_eq!(stored.image_url.as_deref(), Some("https://cdn.example/1l.jpg"));
    assert_eq!(stored.user_score, Some(8));
}

#[tokio::test]
async fn merge_carries_episode_progress() {
    let (service, repo) = service_with_repo();

    let mut seeded = factories::tracked_entry(1, "Cowboy Bebop", WatchStatus::Watching);
    seeded.episodes_watched = Some(13);
    repo.upsert(seeded).await.unwrap();

    service
        .track_or_update(&factories::catalog_entry(1, "Cowboy Bebop"), WatchStatus::OnHold, None)
        .await
        .unwrap();

    let stored = service.entry_once(1).await.unwrap().unwrap();
    assert_eq!(stored.episodes_watched, Some(13));
}

#[tokio::test]
async fn untrack_removes_and_stays_quiet_on_repeat() {
    let (service, _) = service_with_repo();

    service
        .track(&factories::catalog_entry(1, "Cowboy Bebop"))
        .await
        .unwrap();
    service.untrack(1).await.unwrap();
    service.untrack(1).await.unwrap();

    assert_eq!(service.entry_once(1).await.unwrap(), None);
}

#[tokio::test]
async fn live_accessors_follow_writes() {
    let (service, _) = service_with_repo();

    let mut entry = service.entry(1);
    assert_eq!(entry.recv().await.unwrap().unwrap(), None);

    service
        .track(&factories::catalog_entry(1, "Cowboy Bebop"))
        .await
        .unwrap();
    let tracked = entry.recv().await.unwrap().unwrap().unwrap();
    assert_eq!(tracked.status, WatchStatus::Watching);

    service
        .change_status(1, WatchStatus::Completed, Some(9))
        .await
        .unwrap();
    let completed = entry.recv().await.unwrap().unwrap().unwrap();
    assert_eq!(completed.status, WatchStatus::Completed);
    assert_eq!(completed.user_score, Some(9));

    let mut completed_list = service.completed();
    let rows = completed_list.recv().await.unwrap().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Cowboy Bebop");

    let mut watching_count = service.count_for(WatchStatus::Watching);
    assert_eq!(watching_count.recv().await.unwrap().unwrap(), 0);
}
