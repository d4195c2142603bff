use super::*;

/// Tests storing and replacing a user's timezone.
///
/// Expected: Ok with the last written timezone returned
#[tokio::test]
async fn set_replaces_timezone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserTimezoneRepository::new(db);
    assert_eq!(repo.get(1).await?, None);

    repo.set(1, "Asia/Manila").await?;
    repo.set(1, "Europe/Berlin").await?;

    assert_eq!(repo.get(1).await?, Some("Europe/Berlin".to_string()));

    Ok(())
}
