//! Clan wars trophy factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ClanWarsTrophyFactory<'a> {
    db: &'a DatabaseConnection,
    role_id: i64,
    clan_name: String,
    amount: i64,
}

impl<'a> ClanWarsTrophyFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            role_id: id,
            clan_name: format!("Clan {}", id),
            amount: 0,
        }
    }

    pub fn role_id(mut self, role_id: i64) -> Self {
        self.role_id = role_id;
        self
    }

    pub fn clan_name(mut self, clan_name: impl Into<String>) -> Self {
        self.clan_name = clan_name.into();
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub async fn build(self) -> Result<entity::clan_wars_trophy::Model, DbErr> {
        entity::clan_wars_trophy::ActiveModel {
            role_id: ActiveValue::Set(self.role_id),
            clan_name: ActiveValue::Set(self.clan_name),
            amount: ActiveValue::Set(self.amount),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a clan trophy row with the given amount.
pub async fn create_trophy(
    db: &DatabaseConnection,
    amount: i64,
) -> Result<entity::clan_wars_trophy::Model, DbErr> {
    ClanWarsTrophyFactory::new(db).amount(amount).build().await
}
