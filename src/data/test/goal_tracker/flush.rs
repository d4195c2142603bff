use super::*;
use crate::cache::goal::GoalCache;

/// Tests flushing the goal cache through the real repository.
///
/// Verifies the full write-back path: cached mutations reach the table and the dirty marks are
/// cleared afterwards.
///
/// Expected: Ok with the stored row matching the cache and nothing left dirty
#[tokio::test]
async fn flush_persists_cached_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoalTracker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = GoalCache::new(GoalPeriod::Weekly);
    cache.record_pokemon_caught(7, "misty", 1);
    cache.record_pokemon_caught(7, "misty", 1);
    cache.record_fish_caught(8, "brock", 4);

    let repo = GoalTrackerRepository::new(db);
    let report = cache.flush(&repo).await;

    assert_eq!(report.written, 2);
    assert!(report.failed.is_empty());
    assert_eq!(cache.dirty_len(), 0);
    assert_eq!(repo.get(7, GoalPeriod::Weekly).await?, Some(cache.get(7)));
    assert_eq!(
        repo.get(8, GoalPeriod::Weekly).await?.map(|e| e.fish_caught),
        Some(4)
    );

    Ok(())
}

/// Tests that a flush against a missing table leaves every key dirty.
///
/// Expected: all writes reported as failed and retried once the table exists
#[tokio::test]
async fn failed_flush_keeps_keys_dirty() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = GoalCache::new(GoalPeriod::Weekly);
    cache.record_pokemon_caught(7, "misty", 1);
    cache.record_pokemon_caught(8, "brock", 1);

    let repo = GoalTrackerRepository::new(db);
    let report = cache.flush(&repo).await;

    assert_eq!(report.written, 0);
    assert_eq!(report.failed, vec![7, 8]);
    assert!(cache.is_dirty(7));
    assert!(cache.is_dirty(8));

    Ok(())
}
