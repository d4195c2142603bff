//! User alert repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    model::alert::AlertKind,
    util::parse::{id_from_db, id_to_db},
};

pub struct UserAlertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserAlertRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored alert as `(user_id, kind, notify)`.
    ///
    /// Rows with an alert type this build does not know are skipped.
    pub async fn get_all(&self) -> Result<Vec<(u64, AlertKind, bool)>, DbErr> {
        let rows = entity::prelude::UserAlert::find().all(self.db).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                AlertKind::parse(&row.alert_type).map(|kind| (id_from_db(row.user_id), kind, row.notify))
            })
            .collect())
    }

    pub async fn get(&self, user_id: u64, kind: AlertKind) -> Result<Option<bool>, DbErr> {
        let row = entity::prelude::UserAlert::find_by_id((
            id_to_db(user_id),
            kind.as_str().to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(row.map(|r| r.notify))
    }

    pub async fn upsert(
        &self,
        user_id: u64,
        user_name: &str,
        kind: AlertKind,
        notify: bool,
    ) -> Result<(), DbErr> {
        entity::prelude::UserAlert::insert(entity::user_alert::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(user_id)),
            alert_type: ActiveValue::Set(kind.as_str().to_string()),
            user_name: ActiveValue::Set(user_name.to_string()),
            notify: ActiveValue::Set(notify),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_alert::Column::UserId,
                entity::user_alert::Column::AlertType,
            ])
            .update_columns([
                entity::user_alert::Column::UserName,
                entity::user_alert::Column::Notify,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes every alert row of a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    pub async fn delete_all_for_user(&self, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::UserAlert::delete_many()
            .filter(entity::user_alert::Column::UserId.eq(id_to_db(user_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
