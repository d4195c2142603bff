use super::*;

/// Tests selecting due reminders across users.
///
/// Expected: Ok with reminders at or before now, oldest first
#[tokio::test]
async fn returns_due_reminders_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserReminderFactory::new(db).user_id(1).remind_on(500).build().await?;
    UserReminderFactory::new(db).user_id(2).remind_on(300).build().await?;
    UserReminderFactory::new(db).user_id(3).remind_on(1000).build().await?;

    let repo = UserReminderRepository::new(db);
    let due: Vec<i64> = repo
        .get_due(500)
        .await?
        .into_iter()
        .map(|r| r.remind_on)
        .collect();

    assert_eq!(due, vec![300, 500]);

    Ok(())
}

/// Tests rescheduling a repeating reminder out of the due set.
///
/// Expected: Ok with nothing due after the reminder moved forward
#[tokio::test]
async fn rescheduled_reminder_is_no_longer_due() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserReminderFactory::new(db)
        .user_id(1)
        .remind_on(100)
        .repeat_interval(Some(60))
        .build()
        .await?;

    let repo = UserReminderRepository::new(db);
    let due = repo.get_due(130).await?;
    let next = due[0].next_occurrence(130).unwrap();
    repo.reschedule(1, 1, next).await?;

    assert_eq!(next, 160);
    assert!(repo.get_due(130).await?.is_empty());
    assert_eq!(repo.get(1, 1).await?.map(|r| r.remind_on), Some(160));

    Ok(())
}
