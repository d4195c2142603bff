//! Per-user timezone used to read absolute reminder times.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::util::parse::id_to_db;

pub struct UserTimezoneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserTimezoneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored IANA timezone name.
    pub async fn get(&self, user_id: u64) -> Result<Option<String>, DbErr> {
        let row = entity::prelude::UserTimezone::find_by_id(id_to_db(user_id))
            .one(self.db)
            .await?;

        Ok(row.map(|r| r.timezone))
    }

    pub async fn set(&self, user_id: u64, timezone: &str) -> Result<(), DbErr> {
        entity::prelude::UserTimezone::insert(entity::user_timezone::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(user_id)),
            timezone: ActiveValue::Set(timezone.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::user_timezone::Column::UserId)
                .update_column(entity::user_timezone::Column::Timezone)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
