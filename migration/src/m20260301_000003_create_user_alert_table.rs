use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAlert::Table)
                    .if_not_exists()
                    .col(big_integer(UserAlert::UserId))
                    .col(string(UserAlert::AlertType))
                    .col(string(UserAlert::UserName))
                    .col(boolean(UserAlert::Notify).default(false))
                    .primary_key(
                        Index::create()
                            .col(UserAlert::UserId)
                            .col(UserAlert::AlertType),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAlert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAlert {
    Table,
    UserId,
    AlertType,
    UserName,
    Notify,
}
