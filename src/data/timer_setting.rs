//! Timer setting repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    model::timer::{TimerKind, TimerMode, TimerSettings},
    util::parse::id_to_db,
};

pub struct TimerSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimerSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TimerSettings>, DbErr> {
        let rows = entity::prelude::TimerSetting::find().all(self.db).await?;

        Ok(rows.into_iter().map(TimerSettings::from_entity).collect())
    }

    pub async fn get(&self, user_id: u64) -> Result<Option<TimerSettings>, DbErr> {
        let row = entity::prelude::TimerSetting::find_by_id(id_to_db(user_id))
            .one(self.db)
            .await?;

        Ok(row.map(TimerSettings::from_entity))
    }

    /// Returns the user's settings, creating an all-off row first if none exists.
    ///
    /// An existing row keeps its modes; only the stored name is refreshed.
    pub async fn ensure_default(
        &self,
        user_id: u64,
        user_name: &str,
    ) -> Result<TimerSettings, DbErr> {
        entity::prelude::TimerSetting::insert(entity::timer_setting::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(user_id)),
            user_name: ActiveValue::Set(user_name.to_string()),
            pokemon_setting: ActiveValue::Set(TimerMode::Off.as_str().to_string()),
            fish_setting: ActiveValue::Set(TimerMode::Off.as_str().to_string()),
            battle_setting: ActiveValue::Set(TimerMode::Off.as_str().to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::timer_setting::Column::UserId)
                .update_column(entity::timer_setting::Column::UserName)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.get(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("timer_setting {}", user_id)))
    }

    /// Stores one timer mode.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the settings row, which must already exist
    /// - `kind` - Timer being changed; `WorldBoss` has no column and is ignored
    /// - `mode` - New mode
    pub async fn set_mode(
        &self,
        user_id: u64,
        kind: TimerKind,
        mode: TimerMode,
    ) -> Result<(), DbErr> {
        let mut model = entity::timer_setting::ActiveModel {
            user_id: ActiveValue::Unchanged(id_to_db(user_id)),
            ..Default::default()
        };
        let value = ActiveValue::Set(mode.as_str().to_string());
        match kind {
            TimerKind::Pokemon => model.pokemon_setting = value,
            TimerKind::Fish => model.fish_setting = value,
            TimerKind::Battle => model.battle_setting = value,
            TimerKind::WorldBoss => return Ok(()),
        }

        entity::prelude::TimerSetting::update(model)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::TimerSetting::delete_by_id(id_to_db(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
