use super::*;

/// Tests changing the faction of a known member.
///
/// Expected: Ok(true) and the other columns untouched
#[tokio::test]
async fn set_faction_updates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FactionMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FactionMemberFactory::new(db)
        .user_id(21)
        .user_name("misty")
        .channel_id(Some(555))
        .build()
        .await?;

    let repo = FactionMemberRepository::new(db);
    let updated = repo.set_faction(21, Faction::Aqua).await?;

    assert!(updated);
    let member = repo.get_all().await?.pop().unwrap();
    assert_eq!(member.faction, Some(Faction::Aqua));
    assert_eq!(member.channel_id, Some(555));

    Ok(())
}

/// Tests changing the faction of an unknown user.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn set_faction_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FactionMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FactionMemberRepository::new(db);
    let updated = repo.set_faction(21, Faction::Rocket).await?;

    assert!(!updated);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests that upsert replaces every column of an existing member.
///
/// Expected: Ok with the new game name and clan stored
#[tokio::test]
async fn upsert_replaces_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FactionMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FactionMemberFactory::new(db).user_id(21).build().await?;

    let member = FactionMember {
        user_id: 21,
        user_name: "misty".to_string(),
        game_name: Some("MistyW".to_string()),
        clan_name: "Cerulean".to_string(),
        faction: Some(Faction::Magma),
        channel_id: None,
    };
    let repo = FactionMemberRepository::new(db);
    repo.upsert(&member).await?;

    assert_eq!(repo.get_all().await?, vec![member]);

    Ok(())
}

/// Tests deleting a member twice.
///
/// Expected: Ok(true) then Ok(false), with no row left
#[tokio::test]
async fn delete_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FactionMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FactionMemberFactory::new(db).user_id(21).build().await?;

    let repo = FactionMemberRepository::new(db);

    assert!(repo.delete(21).await?);
    assert!(!repo.delete(21).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
