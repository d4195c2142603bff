use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpecialBattleTimer::Table)
                    .if_not_exists()
                    .col(big_integer(SpecialBattleTimer::UserId))
                    .col(string(SpecialBattleTimer::NpcName))
                    .col(string(SpecialBattleTimer::UserName))
                    .col(big_integer(SpecialBattleTimer::EndsOn))
                    .col(big_integer(SpecialBattleTimer::ChannelId))
                    .primary_key(
                        Index::create()
                            .col(SpecialBattleTimer::UserId)
                            .col(SpecialBattleTimer::NpcName),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_special_battle_timer_ends_on")
                    .table(SpecialBattleTimer::Table)
                    .col(SpecialBattleTimer::EndsOn)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecialBattleTimer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpecialBattleTimer {
    Table,
    UserId,
    NpcName,
    UserName,
    EndsOn,
    ChannelId,
}
