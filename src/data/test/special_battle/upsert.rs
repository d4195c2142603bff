use super::*;

/// Tests that a second upsert for the same user and NPC replaces the first.
///
/// Expected: Ok with one row holding the later end time
#[tokio::test]
async fn replaces_timer_for_same_npc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpecialBattleTimer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialBattleTimerRepository::new(db);
    repo.upsert(&timer(1, "xmas_blue", 100)).await?;
    repo.upsert(&timer(1, "xmas_blue", 250)).await?;

    assert_eq!(
        repo.get(1, "xmas_blue").await?.map(|t| t.ends_on),
        Some(250)
    );
    assert_eq!(repo.get_due(i64::MAX).await?.len(), 1);

    Ok(())
}

/// Tests deleting every timer of one user.
///
/// Expected: Ok with only the other user's timer left
#[tokio::test]
async fn delete_all_for_user_leaves_others() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SpecialBattleTimer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialBattleTimerRepository::new(db);
    repo.upsert(&timer(1, "xmas_blue", 100)).await?;
    repo.upsert(&timer(1, "xmas_red", 100)).await?;
    repo.upsert(&timer(2, "xmas_blue", 100)).await?;

    let deleted = repo.delete_all_for_user(1).await?;

    assert_eq!(deleted, 2);
    assert!(repo.get(1, "xmas_red").await?.is_none());
    assert!(repo.get(2, "xmas_blue").await?.is_some());

    Ok(())
}
