//! Goal tracker repository: durable side of the weekly and monthly goal caches.

use async_trait::async_trait;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    cache::goal::GoalStore,
    model::goal::{GoalEntry, GoalPeriod},
    util::parse::{count_to_db, id_to_db},
};

/// Repository providing database operations for goal counters.
pub struct GoalTrackerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GoalTrackerRepository<'a> {
    /// Creates a new GoalTrackerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates the counters for one user and period.
    ///
    /// # Arguments
    /// - `period` - Tracking period the counters belong to
    /// - `entry` - Current cached values
    ///
    /// # Returns
    /// - `Ok(())` - Row written
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, period: GoalPeriod, entry: &GoalEntry) -> Result<(), DbErr> {
        entity::prelude::GoalTracker::insert(entity::goal_tracker::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(entry.user_id)),
            period: ActiveValue::Set(period.as_str().to_string()),
            user_name: ActiveValue::Set(entry.user_name.clone()),
            channel_id: ActiveValue::Set(entry.channel_id.map(id_to_db)),
            pokemon_caught: ActiveValue::Set(count_to_db(entry.pokemon_caught)),
            fish_caught: ActiveValue::Set(count_to_db(entry.fish_caught)),
            battles_won: ActiveValue::Set(count_to_db(entry.battles_won)),
            requirement_met: ActiveValue::Set(entry.requirement_met),
        })
        .on_conflict(
            OnConflict::columns([
                entity::goal_tracker::Column::UserId,
                entity::goal_tracker::Column::Period,
            ])
            .update_columns([
                entity::goal_tracker::Column::UserName,
                entity::goal_tracker::Column::ChannelId,
                entity::goal_tracker::Column::PokemonCaught,
                entity::goal_tracker::Column::FishCaught,
                entity::goal_tracker::Column::BattlesWon,
                entity::goal_tracker::Column::RequirementMet,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets every row of a period, used to warm the cache.
    pub async fn get_all(&self, period: GoalPeriod) -> Result<Vec<GoalEntry>, DbErr> {
        let rows = entity::prelude::GoalTracker::find()
            .filter(entity::goal_tracker::Column::Period.eq(period.as_str()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(GoalEntry::from_entity).collect())
    }

    pub async fn get(&self, user_id: u64, period: GoalPeriod) -> Result<Option<GoalEntry>, DbErr> {
        let row = entity::prelude::GoalTracker::find_by_id((
            id_to_db(user_id),
            period.as_str().to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(row.map(GoalEntry::from_entity))
    }

    /// Deletes every row of a period.
    ///
    /// Running it again in the same period deletes nothing, so the reset job is safe to
    /// re-run.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_period(&self, period: GoalPeriod) -> Result<u64, DbErr> {
        let result = entity::prelude::GoalTracker::delete_many()
            .filter(entity::goal_tracker::Column::Period.eq(period.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl GoalStore for GoalTrackerRepository<'_> {
    async fn upsert_goal(&self, period: GoalPeriod, entry: &GoalEntry) -> Result<(), DbErr> {
        self.upsert(period, entry).await
    }
}
