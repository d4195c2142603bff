use super::*;

/// Tests that upsert renames the clan and replaces its total.
///
/// Expected: Ok with the new name and amount stored under the same role
#[tokio::test]
async fn upsert_replaces_total_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trophy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ClanWarsTrophyFactory::new(db)
        .role_id(900)
        .clan_name("Old Name")
        .amount(3)
        .build()
        .await?;

    let repo = ClanWarsTrophyRepository::new(db);
    let trophy = ClanTrophy {
        role_id: 900,
        clan_name: "Straymons".to_string(),
        amount: 8,
    };
    repo.upsert(&trophy).await?;

    assert_eq!(repo.get(900).await?, Some(trophy));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests the season reset.
///
/// Expected: Ok with the number of deleted clans and an empty table
#[tokio::test]
async fn delete_all_resets_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trophy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::create_trophy(db, 4).await?;
    test_utils::factory::create_trophy(db, 9).await?;

    let repo = ClanWarsTrophyRepository::new(db);

    assert_eq!(repo.delete_all().await?, 2);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
