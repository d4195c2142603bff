use crate::{data::user_alert::UserAlertRepository, model::alert::AlertKind};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod upsert;
