use super::*;

/// Tests that setting a ball twice for a faction keeps the latest one.
///
/// Expected: Ok with one row per faction
#[tokio::test]
async fn set_overwrites_faction_ball() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DailyFactionBall)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FactionBallRepository::new(db);
    repo.set(Faction::Rocket, "Great Ball").await?;
    repo.set(Faction::Rocket, "Ultra Ball").await?;
    repo.set(Faction::Aqua, "Net Ball").await?;

    let mut balls = repo.get_all().await?;
    balls.sort();
    assert_eq!(
        balls,
        vec![
            (Faction::Aqua, "Net Ball".to_string()),
            (Faction::Rocket, "Ultra Ball".to_string())
        ]
    );

    Ok(())
}

/// Tests the daily clear.
///
/// Expected: Ok with every row deleted and a second clear deleting nothing
#[tokio::test]
async fn clear_removes_every_ball() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DailyFactionBall)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FactionBallRepository::new(db);
    repo.set(Faction::Skull, "Dusk Ball").await?;
    repo.set(Faction::Yell, "Quick Ball").await?;

    assert_eq!(repo.clear().await?, 2);
    assert_eq!(repo.clear().await?, 0);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
