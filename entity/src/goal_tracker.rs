use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "goal_tracker")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    /// `weekly` or `monthly`
    #[sea_orm(primary_key, auto_increment = false)]
    pub period: String,
    pub user_name: String,
    pub channel_id: Option<i64>,
    pub pokemon_caught: i64,
    pub fish_caught: i64,
    pub battles_won: i64,
    pub requirement_met: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
