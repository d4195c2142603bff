use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClanWarsTrophy::Table)
                    .if_not_exists()
                    .col(big_integer(ClanWarsTrophy::RoleId).primary_key())
                    .col(string(ClanWarsTrophy::ClanName))
                    .col(big_integer(ClanWarsTrophy::Amount).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrophyLeaderboardMessage::Table)
                    .if_not_exists()
                    .col(big_integer(TrophyLeaderboardMessage::ChannelId).primary_key())
                    .col(big_integer(TrophyLeaderboardMessage::MessageId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(TrophyLeaderboardMessage::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ClanWarsTrophy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClanWarsTrophy {
    Table,
    RoleId,
    ClanName,
    Amount,
}

#[derive(DeriveIden)]
pub enum TrophyLeaderboardMessage {
    Table,
    ChannelId,
    MessageId,
}
