use super::*;

/// Tests per-user id allocation.
///
/// Verifies that ids start at 1 for each user and grow independently.
///
/// Expected: Ok with ids 1, 2 for the first user and 1 for the second
#[tokio::test]
async fn allocates_ids_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserReminderRepository::new(db);
    let first = repo.create(param(1, 100)).await?;
    let second = repo.create(param(1, 200)).await?;
    let other = repo.create(param(2, 100)).await?;

    assert_eq!(first.reminder_id, 1);
    assert_eq!(second.reminder_id, 2);
    assert_eq!(other.reminder_id, 1);

    Ok(())
}

/// Tests allocation after a gap left by a deleted reminder.
///
/// Expected: Ok with the new id one above the highest remaining id
#[tokio::test]
async fn allocates_after_highest_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserReminderFactory::new(db)
        .user_id(1)
        .reminder_id(4)
        .build()
        .await?;

    let repo = UserReminderRepository::new(db);
    let created = repo.create(param(1, 100)).await?;

    assert_eq!(created.reminder_id, 5);

    Ok(())
}

/// Tests that optional fields survive the round trip through the table.
///
/// Expected: Ok with DM delivery, the repeat interval and target channel stored
#[tokio::test]
async fn stores_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut p = param(1, 100);
    p.notify_type = NotifyType::Dm;
    p.repeat_interval = Some(3600);
    p.target_channel = Some(777);

    let repo = UserReminderRepository::new(db);
    let created = repo.create(p).await?;

    assert_eq!(repo.get(1, created.reminder_id).await?, Some(created.clone()));
    assert_eq!(created.notify_type, NotifyType::Dm);
    assert_eq!(created.repeat_interval, Some(3600));
    assert_eq!(created.target_channel, Some(777));

    Ok(())
}
