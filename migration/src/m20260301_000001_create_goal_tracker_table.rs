use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GoalTracker::Table)
                    .if_not_exists()
                    .col(big_integer(GoalTracker::UserId))
                    .col(string(GoalTracker::Period))
                    .col(string(GoalTracker::UserName))
                    .col(big_integer_null(GoalTracker::ChannelId))
                    .col(big_integer(GoalTracker::PokemonCaught).default(0))
                    .col(big_integer(GoalTracker::FishCaught).default(0))
                    .col(big_integer(GoalTracker::BattlesWon).default(0))
                    .col(boolean(GoalTracker::RequirementMet).default(false))
                    .primary_key(
                        Index::create()
                            .col(GoalTracker::UserId)
                            .col(GoalTracker::Period),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GoalTracker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GoalTracker {
    Table,
    UserId,
    Period,
    UserName,
    ChannelId,
    PokemonCaught,
    FishCaught,
    BattlesWon,
    RequirementMet,
}
