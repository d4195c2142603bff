use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserReminder::Table)
                    .if_not_exists()
                    .col(big_integer(UserReminder::UserId))
                    .col(integer(UserReminder::ReminderId))
                    .col(string(UserReminder::UserName))
                    .col(text(UserReminder::Message))
                    .col(big_integer(UserReminder::RemindOn))
                    .col(string(UserReminder::NotifyType))
                    .col(big_integer_null(UserReminder::RepeatInterval))
                    .col(big_integer_null(UserReminder::TargetChannel))
                    .primary_key(
                        Index::create()
                            .col(UserReminder::UserId)
                            .col(UserReminder::ReminderId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_reminder_remind_on")
                    .table(UserReminder::Table)
                    .col(UserReminder::RemindOn)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserTimezone::Table)
                    .if_not_exists()
                    .col(big_integer(UserTimezone::UserId).primary_key())
                    .col(string(UserTimezone::Timezone))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserTimezone::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserReminder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserReminder {
    Table,
    UserId,
    ReminderId,
    UserName,
    Message,
    RemindOn,
    NotifyType,
    RepeatInterval,
    TargetChannel,
}

#[derive(DeriveIden)]
pub enum UserTimezone {
    Table,
    UserId,
    Timezone,
}
