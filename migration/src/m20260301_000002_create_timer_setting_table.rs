use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimerSetting::Table)
                    .if_not_exists()
                    .col(big_integer(TimerSetting::UserId).primary_key())
                    .col(string(TimerSetting::UserName))
                    .col(string(TimerSetting::PokemonSetting).default("off"))
                    .col(string(TimerSetting::FishSetting).default("off"))
                    .col(string(TimerSetting::BattleSetting).default("off"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimerSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimerSetting {
    Table,
    UserId,
    UserName,
    PokemonSetting,
    FishSetting,
    BattleSetting,
}
