use super::*;

/// Tests that the period reset deletes only that period's rows.
///
/// Expected: Ok with weekly rows gone and monthly rows kept
#[tokio::test]
async fn deletes_only_requested_period() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoalTracker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GoalTrackerFactory::new(db, "weekly").build().await?;
    GoalTrackerFactory::new(db, "weekly").build().await?;
    GoalTrackerFactory::new(db, "monthly").build().await?;

    let repo = GoalTrackerRepository::new(db);
    let deleted = repo.delete_period(GoalPeriod::Weekly).await?;

    assert_eq!(deleted, 2);
    assert!(repo.get_all(GoalPeriod::Weekly).await?.is_empty());
    assert_eq!(repo.get_all(GoalPeriod::Monthly).await?.len(), 1);

    Ok(())
}

/// Tests running the reset twice in the same period.
///
/// Expected: Ok with the second run deleting zero rows and leaving the same state
#[tokio::test]
async fn second_reset_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoalTracker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GoalTrackerFactory::new(db, "monthly").build().await?;
    GoalTrackerFactory::new(db, "weekly").build().await?;

    let repo = GoalTrackerRepository::new(db);
    let first = repo.delete_period(GoalPeriod::Monthly).await?;
    let second = repo.delete_period(GoalPeriod::Monthly).await?;

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    assert_eq!(entity::prelude::GoalTracker::find().count(db).await?, 1);

    Ok(())
}
