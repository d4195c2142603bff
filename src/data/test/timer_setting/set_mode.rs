use super::*;

/// Tests changing a single timer column.
///
/// Expected: Ok with only the pokemon column changed
#[tokio::test]
async fn updates_one_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TimerSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimerSettingRepository::new(db);
    repo.ensure_default(10, "ash").await?;
    repo.set_mode(10, TimerKind::Pokemon, TimerMode::React).await?;

    let settings = repo.get(10).await?.unwrap();
    assert_eq!(settings.pokemon, TimerMode::React);
    assert_eq!(settings.fish, TimerMode::Off);
    assert_eq!(settings.battle, TimerMode::Off);

    Ok(())
}

/// Tests that the world boss timer has no stored column.
///
/// Expected: Ok with the row unchanged
#[tokio::test]
async fn ignores_world_boss() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TimerSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimerSettingRepository::new(db);
    let before = repo.ensure_default(10, "ash").await?;
    repo.set_mode(10, TimerKind::WorldBoss, TimerMode::On).await?;

    assert_eq!(repo.get(10).await?, Some(before));

    Ok(())
}
