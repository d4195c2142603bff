//! Clan wars trophy totals and the stored leaderboard message.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::trophy::ClanTrophy,
    util::parse::{count_to_db, id_from_db, id_to_db},
};

/// Repository providing database operations for clan trophy totals.
pub struct ClanWarsTrophyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanWarsTrophyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, role_id: u64) -> Result<Option<ClanTrophy>, DbErr> {
        let row = entity::prelude::ClanWarsTrophy::find_by_id(id_to_db(role_id))
            .one(self.db)
            .await?;

        Ok(row.map(ClanTrophy::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<ClanTrophy>, DbErr> {
        let rows = entity::prelude::ClanWarsTrophy::find().all(self.db).await?;

        Ok(rows.into_iter().map(ClanTrophy::from_entity).collect())
    }

    /// Sets the total for a clan, refreshing its name from the role.
    pub async fn upsert(&self, trophy: &ClanTrophy) -> Result<(), DbErr> {
        entity::prelude::ClanWarsTrophy::insert(entity::clan_wars_trophy::ActiveModel {
            role_id: ActiveValue::Set(id_to_db(trophy.role_id)),
            clan_name: ActiveValue::Set(trophy.clan_name.clone()),
            amount: ActiveValue::Set(count_to_db(trophy.amount)),
        })
        .on_conflict(
            OnConflict::column(entity::clan_wars_trophy::Column::RoleId)
                .update_columns([
                    entity::clan_wars_trophy::Column::ClanName,
                    entity::clan_wars_trophy::Column::Amount,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes every clan total.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::ClanWarsTrophy::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Tracks which message in a channel holds the live trophy leaderboard.
pub struct LeaderboardMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the leaderboard message id for a channel.
    pub async fn get(&self, channel_id: u64) -> Result<Option<u64>, DbErr> {
        let row = entity::prelude::TrophyLeaderboardMessage::find_by_id(id_to_db(channel_id))
            .one(self.db)
            .await?;

        Ok(row.map(|r| id_from_db(r.message_id)))
    }

    pub async fn upsert(&self, channel_id: u64, message_id: u64) -> Result<(), DbErr> {
        entity::prelude::TrophyLeaderboardMessage::insert(
            entity::trophy_leaderboard_message::ActiveModel {
                channel_id: ActiveValue::Set(id_to_db(channel_id)),
                message_id: ActiveValue::Set(id_to_db(message_id)),
            },
        )
        .on_conflict(
            OnConflict::column(entity::trophy_leaderboard_message::Column::ChannelId)
                .update_column(entity::trophy_leaderboard_message::Column::MessageId)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, channel_id: u64) -> Result<u64, DbErr> {
        let result =
            entity::prelude::TrophyLeaderboardMessage::delete_by_id(id_to_db(channel_id))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected)
    }
}
