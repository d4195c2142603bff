use super::*;

/// Tests creating settings for a user without a row.
///
/// Expected: Ok with every timer off
#[tokio::test]
async fn creates_all_off_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TimerSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimerSettingRepository::new(db);
    let settings = repo.ensure_default(10, "ash").await?;

    assert_eq!(settings.user_name, "ash");
    assert_eq!(settings.pokemon, TimerMode::Off);
    assert_eq!(settings.fish, TimerMode::Off);
    assert_eq!(settings.battle, TimerMode::Off);

    Ok(())
}

/// Tests that an existing row keeps its modes.
///
/// Verifies that opening the settings menu again refreshes the stored name without resetting
/// the user's choices.
///
/// Expected: Ok with the old modes and the new name
#[tokio::test]
async fn keeps_existing_modes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TimerSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimerSettingRepository::new(db);
    repo.ensure_default(10, "ash").await?;
    repo.set_mode(10, TimerKind::Fish, TimerMode::On).await?;

    let settings = repo.ensure_default(10, "ash_ketchum").await?;

    assert_eq!(settings.user_name, "ash_ketchum");
    assert_eq!(settings.fish, TimerMode::On);

    Ok(())
}
