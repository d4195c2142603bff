//! Faction member factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating clan members.
///
/// # Example
///
/// ```rust,ignore
/// let member = FactionMemberFactory::new(&db)
///     .user_name("Misty")
///     .faction("aqua")
///     .channel_id(Some(555))
///     .build()
///     .await?;
/// ```
pub struct FactionMemberFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    user_name: String,
    game_name: Option<String>,
    clan_name: String,
    faction: Option<String>,
    channel_id: Option<i64>,
}

impl<'a> FactionMemberFactory<'a> {
    /// Defaults:
    /// - user_id: auto-incremented
    /// - user_name: `"member{id}"`
    /// - clan_name: `"Straymons"`
    /// - faction, game_name, channel_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id,
            user_name: format!("member{}", id),
            game_name: None,
            clan_name: "Straymons".to_string(),
            faction: None,
            channel_id: None,
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn game_name(mut self, game_name: impl Into<String>) -> Self {
        self.game_name = Some(game_name.into());
        self
    }

    pub fn clan_name(mut self, clan_name: impl Into<String>) -> Self {
        self.clan_name = clan_name.into();
        self
    }

    pub fn faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn channel_id(mut self, channel_id: Option<i64>) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub async fn build(self) -> Result<entity::faction_member::Model, DbErr> {
        entity::faction_member::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(self.user_name),
            game_name: ActiveValue::Set(self.game_name),
            clan_name: ActiveValue::Set(self.clan_name),
            faction: ActiveValue::Set(self.faction),
            channel_id: ActiveValue::Set(self.channel_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a clan member with default values.
pub async fn create_faction_member(
    db: &DatabaseConnection,
) -> Result<entity::faction_member::Model, DbErr> {
    FactionMemberFactory::new(db).build().await
}
