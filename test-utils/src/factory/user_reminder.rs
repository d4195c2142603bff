//! Reminder factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating reminders.
///
/// The reminder id is chosen by the caller; the repository's own id allocation is what the
/// data tests exercise.
pub struct UserReminderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    reminder_id: i32,
    user_name: String,
    message: String,
    remind_on: i64,
    notify_type: String,
    repeat_interval: Option<i64>,
    target_channel: Option<i64>,
}

impl<'a> UserReminderFactory<'a> {
    /// Defaults:
    /// - user_id: auto-incremented
    /// - reminder_id: `1`
    /// - remind_on: `1_700_000_000`
    /// - notify_type: `"Channel"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id,
            reminder_id: 1,
            user_name: format!("user{}", id),
            message: "claim daily".to_string(),
            remind_on: 1_700_000_000,
            notify_type: "Channel".to_string(),
            repeat_interval: None,
            target_channel: None,
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn reminder_id(mut self, reminder_id: i32) -> Self {
        self.reminder_id = reminder_id;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn remind_on(mut self, remind_on: i64) -> Self {
        self.remind_on = remind_on;
        self
    }

    pub fn notify_type(mut self, notify_type: impl Into<String>) -> Self {
        self.notify_type = notify_type.into();
        self
    }

    pub fn repeat_interval(mut self, repeat_interval: Option<i64>) -> Self {
        self.repeat_interval = repeat_interval;
        self
    }

    pub fn target_channel(mut self, target_channel: Option<i64>) -> Self {
        self.target_channel = target_channel;
        self
    }

    pub async fn build(self) -> Result<entity::user_reminder::Model, DbErr> {
        entity::user_reminder::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            reminder_id: ActiveValue::Set(self.reminder_id),
            user_name: ActiveValue::Set(self.user_name),
            message: ActiveValue::Set(self.message),
            remind_on: ActiveValue::Set(self.remind_on),
            notify_type: ActiveValue::Set(self.notify_type),
            repeat_interval: ActiveValue::Set(self.repeat_interval),
            target_channel: ActiveValue::Set(self.target_channel),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a one-off channel reminder with default values.
pub async fn create_reminder(
    db: &DatabaseConnection,
) -> Result<entity::user_reminder::Model, DbErr> {
    UserReminderFactory::new(db).build().await
}
