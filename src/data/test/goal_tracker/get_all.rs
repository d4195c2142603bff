use super::*;

/// Tests loading only the rows of the requested period.
///
/// Expected: Ok with the two weekly rows and none of the monthly ones
#[tokio::test]
async fn returns_rows_of_one_period() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoalTracker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GoalTrackerFactory::new(db, "weekly").user_id(1).build().await?;
    GoalTrackerFactory::new(db, "weekly").user_id(2).build().await?;
    GoalTrackerFactory::new(db, "monthly").user_id(3).build().await?;

    let repo = GoalTrackerRepository::new(db);
    let mut ids: Vec<u64> = repo
        .get_all(GoalPeriod::Weekly)
        .await?
        .into_iter()
        .map(|e| e.user_id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![1, 2]);

    Ok(())
}
