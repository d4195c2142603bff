use super::*;

/// Tests toggling an alert on and off again.
///
/// Expected: Ok with a single row whose flag follows the last write
#[tokio::test]
async fn toggles_existing_alert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserAlert)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserAlertRepository::new(db);
    repo.upsert(5, "brock", AlertKind::FactionBall, true).await?;
    assert_eq!(repo.get(5, AlertKind::FactionBall).await?, Some(true));

    repo.upsert(5, "brock", AlertKind::FactionBall, false).await?;
    assert_eq!(repo.get(5, AlertKind::FactionBall).await?, Some(false));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that alert kinds are stored per user independently.
///
/// Expected: Ok with both kinds loaded and the unset kind absent
#[tokio::test]
async fn kinds_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserAlert)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserAlertRepository::new(db);
    repo.upsert(5, "brock", AlertKind::WorldBoss, true).await?;
    repo.upsert(6, "misty", AlertKind::FactionBall, true).await?;

    assert_eq!(repo.get(5, AlertKind::FactionBall).await?, None);

    let mut all = repo.get_all().await?;
    all.sort_by_key(|(user_id, _, _)| *user_id);
    assert_eq!(
        all,
        vec![
            (5, AlertKind::WorldBoss, true),
            (6, AlertKind::FactionBall, true)
        ]
    );

    Ok(())
}

/// Tests removing every alert of a user who left.
///
/// Expected: Ok with the user's rows gone and other users untouched
#[tokio::test]
async fn delete_all_for_user_removes_only_that_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserAlert)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserAlertRepository::new(db);
    repo.upsert(5, "brock", AlertKind::WorldBoss, true).await?;
    repo.upsert(5, "brock", AlertKind::FactionBall, true).await?;
    repo.upsert(6, "misty", AlertKind::FactionBall, true).await?;

    let deleted = repo.delete_all_for_user(5).await?;

    assert_eq!(deleted, 2);
    assert_eq!(
        repo.get_all().await?,
        vec![(6, AlertKind::FactionBall, true)]
    );

    Ok(())
}
