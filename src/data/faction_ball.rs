//! Daily faction ball repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::faction::Faction;

pub struct FactionBallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionBallRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets today's balls. Rows naming an unknown faction are skipped.
    pub async fn get_all(&self) -> Result<Vec<(Faction, String)>, DbErr> {
        let rows = entity::prelude::DailyFactionBall::find().all(self.db).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| row.faction.parse().ok().map(|f| (f, row.ball)))
            .collect())
    }

    pub async fn set(&self, faction: Faction, ball: &str) -> Result<(), DbErr> {
        entity::prelude::DailyFactionBall::insert(entity::daily_faction_ball::ActiveModel {
            faction: ActiveValue::Set(faction.as_str().to_string()),
            ball: ActiveValue::Set(ball.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::daily_faction_ball::Column::Faction)
                .update_column(entity::daily_faction_ball::Column::Ball)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes every stored ball.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    pub async fn clear(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::DailyFactionBall::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
