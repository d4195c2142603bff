//! Special battle timer repository.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::special_battle::SpecialBattleTimer, util::parse::id_to_db};

pub struct SpecialBattleTimerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecialBattleTimerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        user_id: u64,
        npc_name: &str,
    ) -> Result<Option<SpecialBattleTimer>, DbErr> {
        let row = entity::prelude::SpecialBattleTimer::find_by_id((
            id_to_db(user_id),
            npc_name.to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(row.map(SpecialBattleTimer::from_entity))
    }

    /// Inserts or replaces the timer for `(user_id, npc_name)`.
    pub async fn upsert(&self, timer: &SpecialBattleTimer) -> Result<(), DbErr> {
        entity::prelude::SpecialBattleTimer::insert(entity::special_battle_timer::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(timer.user_id)),
            npc_name: ActiveValue::Set(timer.npc_name.clone()),
            user_name: ActiveValue::Set(timer.user_name.clone()),
            ends_on: ActiveValue::Set(timer.ends_on),
            channel_id: ActiveValue::Set(id_to_db(timer.channel_id)),
        })
        .on_conflict(
            OnConflict::columns([
                entity::special_battle_timer::Column::UserId,
                entity::special_battle_timer::Column::NpcName,
            ])
            .update_columns([
                entity::special_battle_timer::Column::UserName,
                entity::special_battle_timer::Column::EndsOn,
                entity::special_battle_timer::Column::ChannelId,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets every timer ending at or before `now`, earliest first.
    pub async fn get_due(&self, now: i64) -> Result<Vec<SpecialBattleTimer>, DbErr> {
        let rows = entity::prelude::SpecialBattleTimer::find()
            .filter(entity::special_battle_timer::Column::EndsOn.lte(now))
            .order_by_asc(entity::special_battle_timer::Column::EndsOn)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(SpecialBattleTimer::from_entity).collect())
    }

    /// # Returns
    /// - `Ok(true)` - Timer deleted
    /// - `Ok(false)` - No such timer
    pub async fn delete(&self, user_id: u64, npc_name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::SpecialBattleTimer::delete_by_id((
            id_to_db(user_id),
            npc_name.to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// # Returns
    /// - `Ok(u64)` - Number of timers deleted
    pub async fn delete_all_for_user(&self, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::SpecialBattleTimer::delete_many()
            .filter(entity::special_battle_timer::Column::UserId.eq(id_to_db(user_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
