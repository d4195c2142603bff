use crate::{
    data::timer_setting::TimerSettingRepository,
    model::timer::{TimerKind, TimerMode},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod ensure_default;
mod set_mode;
