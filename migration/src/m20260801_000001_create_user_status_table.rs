use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStatus::Table)
                    .if_not_exists()
                    .col(string(UserStatus::UserId).primary_key())
                    .col(string(UserStatus::UserName))
                    .col(string(UserStatus::Category))
                    .col(integer(UserStatus::Stage).default(1))
                    .col(boolean(UserStatus::MaxRank).default(false))
                    .col(timestamp(UserStatus::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserStatus {
    Table,
    UserId,
    UserName,
    Category,
    Stage,
    MaxRank,
    UpdatedAt,
}
