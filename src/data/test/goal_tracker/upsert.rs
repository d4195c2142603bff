use super::*;

/// Tests inserting a goal row for a user seen for the first time.
///
/// Expected: Ok with one row holding the cached counters
#[tokio::test]
async fn inserts_new_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoalTracker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut entry = GoalEntry::new(42, "ash");
    entry.pokemon_caught = 12;
    entry.channel_id = Some(555);

    let repo = GoalTrackerRepository::new(db);
    repo.upsert(GoalPeriod::Weekly, &entry).await?;

    let stored = repo.get(42, GoalPeriod::Weekly).await?;
    assert_eq!(stored, Some(entry));

    Ok(())
}

/// Tests that a second upsert updates counters instead of inserting a duplicate.
///
/// Expected: Ok with a single row carrying the latest values
#[tokio::test]
async fn updates_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoalTracker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GoalTrackerFactory::new(db, "weekly")
        .user_id(42)
        .pokemon_caught(3)
        .build()
        .await?;

    let mut entry = GoalEntry::new(42, "ash");
    entry.pokemon_caught = 9;
    entry.fish_caught = 2;
    entry.requirement_met = true;

    let repo = GoalTrackerRepository::new(db);
    repo.upsert(GoalPeriod::Weekly, &entry).await?;

    let count = entity::prelude::GoalTracker::find().count(db).await?;
    assert_eq!(count, 1);
    let stored = repo.get(42, GoalPeriod::Weekly).await?.unwrap();
    assert_eq!(stored.pokemon_caught, 9);
    assert_eq!(stored.fish_caught, 2);
    assert!(stored.requirement_met);

    Ok(())
}

/// Tests that weekly and monthly rows for the same user are independent.
///
/// Expected: Ok with the monthly row untouched by a weekly upsert
#[tokio::test]
async fn keeps_periods_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoalTracker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GoalTrackerFactory::new(db, "monthly")
        .user_id(42)
        .pokemon_caught(100)
        .build()
        .await?;

    let mut entry = GoalEntry::new(42, "ash");
    entry.pokemon_caught = 5;

    let repo = GoalTrackerRepository::new(db);
    repo.upsert(GoalPeriod::Weekly, &entry).await?;

    let monthly = repo.get(42, GoalPeriod::Monthly).await?.unwrap();
    assert_eq!(monthly.pokemon_caught, 100);

    Ok(())
}
