use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FactionMember::Table)
                    .if_not_exists()
                    .col(big_integer(FactionMember::UserId).primary_key())
                    .col(string(FactionMember::UserName))
                    .col(string_null(FactionMember::GameName))
                    .col(string(FactionMember::ClanName))
                    .col(string_null(FactionMember::Faction))
                    .col(big_integer_null(FactionMember::ChannelId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DailyFactionBall::Table)
                    .if_not_exists()
                    .col(string(DailyFactionBall::Faction).primary_key())
                    .col(string(DailyFactionBall::Ball))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyFactionBall::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FactionMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FactionMember {
    Table,
    UserId,
    UserName,
    GameName,
    ClanName,
    Faction,
    ChannelId,
}

#[derive(DeriveIden)]
pub enum DailyFactionBall {
    Table,
    Faction,
    Ball,
}
