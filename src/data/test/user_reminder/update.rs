use super::*;

/// Tests that a partial update only touches the given fields.
///
/// Expected: Ok with a new message and everything else unchanged
#[tokio::test]
async fn changes_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserReminderRepository::new(db);
    let created = repo.create(param(1, 100)).await?;

    let updated = repo
        .update(
            1,
            created.reminder_id,
            UpdateReminderParam {
                message: Some("vote for the bot".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.message, "vote for the bot");
    assert_eq!(updated.remind_on, created.remind_on);
    assert_eq!(updated.notify_type, created.notify_type);

    Ok(())
}

/// Tests clearing the target channel through an update.
///
/// Expected: Ok with the target channel removed
#[tokio::test]
async fn clears_target_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserReminderFactory::new(db)
        .user_id(1)
        .target_channel(Some(777))
        .build()
        .await?;

    let repo = UserReminderRepository::new(db);
    let updated = repo
        .update(
            1,
            1,
            UpdateReminderParam {
                target_channel: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.target_channel, None);

    Ok(())
}

/// Tests updating a reminder the user does not have.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_reminder_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserReminderRepository::new(db);
    let result = repo
        .update(1, 3, UpdateReminderParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
