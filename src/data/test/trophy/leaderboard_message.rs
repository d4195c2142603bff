use super::*;

/// Tests replacing the stored leaderboard message for a channel.
///
/// Expected: Ok with the newest message id returned
#[tokio::test]
async fn upsert_replaces_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trophy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaderboardMessageRepository::new(db);
    repo.upsert(50, 1).await?;
    repo.upsert(50, 2).await?;

    assert_eq!(repo.get(50).await?, Some(2));

    Ok(())
}

/// Tests forgetting a leaderboard message that was deleted in Discord.
///
/// Expected: Ok with no message stored afterwards
#[tokio::test]
async fn delete_forgets_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trophy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaderboardMessageRepository::new(db);
    repo.upsert(50, 1).await?;

    assert_eq!(repo.delete(50).await?, 1);
    assert_eq!(repo.get(50).await?, None);

    Ok(())
}
