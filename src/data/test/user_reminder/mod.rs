use crate::{
    data::{user_reminder::UserReminderRepository, user_timezone::UserTimezoneRepository},
    model::reminder::{CreateReminderParam, NotifyType, UpdateReminderParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user_reminder::UserReminderFactory};

mod create;
mod delete;
mod get_due;
mod timezone;
mod update;

fn param(user_id: u64, remind_on: i64) -> CreateReminderParam {
    CreateReminderParam {
        user_id,
        user_name: "ash".to_string(),
        message: "claim daily".to_string(),
        remind_on,
        notify_type: NotifyType::Channel,
        repeat_interval: None,
        target_channel: None,
    }
}
