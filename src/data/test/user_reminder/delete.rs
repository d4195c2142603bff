use super::*;

/// Tests deleting one reminder.
///
/// Expected: Ok(true) once, then Ok(false) for the same id
#[tokio::test]
async fn deletes_single_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserReminderRepository::new(db);
    repo.create(param(1, 100)).await?;
    repo.create(param(1, 200)).await?;

    assert!(repo.delete(1, 1).await?);
    assert!(!repo.delete(1, 1).await?);
    assert_eq!(repo.get_by_user(1).await?.len(), 1);

    Ok(())
}

/// Tests deleting all of one user's reminders.
///
/// Expected: Ok with the other user's reminders kept
#[tokio::test]
async fn delete_all_keeps_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserReminderRepository::new(db);
    repo.create(param(1, 100)).await?;
    repo.create(param(1, 200)).await?;
    repo.create(param(2, 100)).await?;

    assert_eq!(repo.delete_all_for_user(1).await?, 2);
    assert!(repo.get_by_user(1).await?.is_empty());
    assert_eq!(repo.get_by_user(2).await?.len(), 1);

    Ok(())
}
