use super::*;

/// Tests selecting timers that ended.
///
/// Expected: Ok with timers at or before now, earliest first
#[tokio::test]
async fn returns_ended_timers_earliest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpecialBattleTimer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialBattleTimerRepository::new(db);
    repo.upsert(&timer(1, "xmas_blue", 500)).await?;
    repo.upsert(&timer(2, "xmas_blue", 300)).await?;
    repo.upsert(&timer(3, "xmas_blue", 900)).await?;

    let due: Vec<u64> = repo
        .get_due(500)
        .await?
        .into_iter()
        .map(|t| t.user_id)
        .collect();

    assert_eq!(due, vec![2, 1]);

    assert!(repo.delete(2, "xmas_blue").await?);
    assert!(!repo.delete(2, "xmas_blue").await?);
    assert_eq!(repo.get_due(500).await?.len(), 1);

    Ok(())
}
