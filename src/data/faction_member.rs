//! Faction member repository.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    model::faction::{Faction, FactionMember},
    util::parse::id_to_db,
};

pub struct FactionMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<FactionMember>, DbErr> {
        let rows = entity::prelude::FactionMember::find().all(self.db).await?;

        Ok(rows.into_iter().map(FactionMember::from_entity).collect())
    }

    pub async fn upsert(&self, member: &FactionMember) -> Result<(), DbErr> {
        entity::prelude::FactionMember::insert(entity::faction_member::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(member.user_id)),
            user_name: ActiveValue::Set(member.user_name.clone()),
            game_name: ActiveValue::Set(member.game_name.clone()),
            clan_name: ActiveValue::Set(member.clan_name.clone()),
            faction: ActiveValue::Set(member.faction.map(|f| f.as_str().to_string())),
            channel_id: ActiveValue::Set(member.channel_id.map(id_to_db)),
        })
        .on_conflict(
            OnConflict::column(entity::faction_member::Column::UserId)
                .update_columns([
                    entity::faction_member::Column::UserName,
                    entity::faction_member::Column::GameName,
                    entity::faction_member::Column::ClanName,
                    entity::faction_member::Column::Faction,
                    entity::faction_member::Column::ChannelId,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Updates only the faction of an existing member.
    ///
    /// # Returns
    /// - `Ok(true)` - Member found and updated
    /// - `Ok(false)` - No member with this id
    pub async fn set_faction(&self, user_id: u64, faction: Faction) -> Result<bool, DbErr> {
        let result = entity::prelude::FactionMember::update_many()
            .col_expr(
                entity::faction_member::Column::Faction,
                Expr::value(faction.as_str()),
            )
            .filter(entity::faction_member::Column::UserId.eq(id_to_db(user_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// # Returns
    /// - `Ok(true)` - Member deleted
    /// - `Ok(false)` - No member with this id
    pub async fn delete(&self, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::FactionMember::delete_by_id(id_to_db(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
