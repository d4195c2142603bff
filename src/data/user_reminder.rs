//! User reminder repository.
//!
//! Reminders are numbered per user starting at 1. A new reminder takes the user's highest id
//! plus one, so ids of deleted reminders are only reused once every higher id is gone.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::reminder::{CreateReminderParam, Reminder, UpdateReminderParam},
    util::parse::id_to_db,
};

pub struct UserReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserReminderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reminder with the next free per-user id.
    ///
    /// # Arguments
    /// - `param` - Reminder fields; the id is allocated here
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The stored reminder including its id
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create(&self, param: CreateReminderParam) -> Result<Reminder, DbErr> {
        let last = entity::prelude::UserReminder::find()
            .filter(entity::user_reminder::Column::UserId.eq(id_to_db(param.user_id)))
            .order_by_desc(entity::user_reminder::Column::ReminderId)
            .one(self.db)
            .await?;
        let reminder_id = last.map(|r| r.reminder_id + 1).unwrap_or(1);

        let model = entity::user_reminder::ActiveModel {
            user_id: ActiveValue::Set(id_to_db(param.user_id)),
            reminder_id: ActiveValue::Set(reminder_id),
            user_name: ActiveValue::Set(param.user_name),
            message: ActiveValue::Set(param.message),
            remind_on: ActiveValue::Set(param.remind_on),
            notify_type: ActiveValue::Set(param.notify_type.as_str().to_string()),
            repeat_interval: ActiveValue::Set(param.repeat_interval),
            target_channel: ActiveValue::Set(param.target_channel.map(id_to_db)),
        }
        .insert(self.db)
        .await?;

        Ok(Reminder::from_entity(model))
    }

    pub async fn get(&self, user_id: u64, reminder_id: i32) -> Result<Option<Reminder>, DbErr> {
        let row = entity::prelude::UserReminder::find_by_id((id_to_db(user_id), reminder_id))
            .one(self.db)
            .await?;

        Ok(row.map(Reminder::from_entity))
    }

    /// Gets a user's reminders ordered by id.
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<Reminder>, DbErr> {
        let rows = entity::prelude::UserReminder::find()
            .filter(entity::user_reminder::Column::UserId.eq(id_to_db(user_id)))
            .order_by_asc(entity::user_reminder::Column::ReminderId)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Reminder::from_entity).collect())
    }

    /// Gets every reminder due at or before `now`, oldest first.
    ///
    /// # Arguments
    /// - `now` - Current Unix timestamp in seconds
    pub async fn get_due(&self, now: i64) -> Result<Vec<Reminder>, DbErr> {
        let rows = entity::prelude::UserReminder::find()
            .filter(entity::user_reminder::Column::RemindOn.lte(now))
            .order_by_asc(entity::user_reminder::Column::RemindOn)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Reminder::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Reminder))` - The updated reminder
    /// - `Ok(None)` - The user has no reminder with this id
    pub async fn update(
        &self,
        user_id: u64,
        reminder_id: i32,
        param: UpdateReminderParam,
    ) -> Result<Option<Reminder>, DbErr> {
        let Some(existing) =
            entity::prelude::UserReminder::find_by_id((id_to_db(user_id), reminder_id))
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(message) = param.message {
            model.message = ActiveValue::Set(message);
        }
        if let Some(remind_on) = param.remind_on {
            model.remind_on = ActiveValue::Set(remind_on);
        }
        if let Some(notify_type) = param.notify_type {
            model.notify_type = ActiveValue::Set(notify_type.as_str().to_string());
        }
        if let Some(repeat_interval) = param.repeat_interval {
            model.repeat_interval = ActiveValue::Set(Some(repeat_interval));
        }
        if let Some(target_channel) = param.target_channel {
            model.target_channel = ActiveValue::Set(target_channel.map(id_to_db));
        }

        let updated = model.update(self.db).await?;

        Ok(Some(Reminder::from_entity(updated)))
    }

    /// Moves a reminder to its next occurrence after delivery.
    pub async fn reschedule(
        &self,
        user_id: u64,
        reminder_id: i32,
        remind_on: i64,
    ) -> Result<(), DbErr> {
        entity::prelude::UserReminder::update(entity::user_reminder::ActiveModel {
            user_id: ActiveValue::Unchanged(id_to_db(user_id)),
            reminder_id: ActiveValue::Unchanged(reminder_id),
            remind_on: ActiveValue::Set(remind_on),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// # Returns
    /// - `Ok(true)` - Reminder deleted
    /// - `Ok(false)` - No such reminder
    pub async fn delete(&self, user_id: u64, reminder_id: i32) -> Result<bool, DbErr> {
        let result =
            entity::prelude::UserReminder::delete_by_id((id_to_db(user_id), reminder_id))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    /// # Returns
    /// - `Ok(u64)` - Number of reminders deleted
    pub async fn delete_all_for_user(&self, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::UserReminder::delete_many()
            .filter(entity::user_reminder::Column::UserId.eq(id_to_db(user_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
