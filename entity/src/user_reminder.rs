use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_reminder")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    /// Per-user sequence number shown to the user
    #[sea_orm(primary_key, auto_increment = false)]
    pub reminder_id: i32,
    pub user_name: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// Unix timestamp in seconds
    pub remind_on: i64,
    pub notify_type: String,
    /// Seconds between repeats
    pub repeat_interval: Option<i64>,
    pub target_channel: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
