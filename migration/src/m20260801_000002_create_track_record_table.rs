use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackRecord::Table)
                    .if_not_exists()
                    .col(string(TrackRecord::UserId))
                    .col(string(TrackRecord::Category))
                    .col(string(TrackRecord::Track))
                    .col(string(TrackRecord::UserName))
                    .col(integer(TrackRecord::TotalValue).default(0))
                    .col(json(TrackRecord::CompletedTiers))
                    .col(timestamp(TrackRecord::UpdatedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .col(TrackRecord::UserId)
                            .col(TrackRecord::Category)
                            .col(TrackRecord::Track),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum TrackRecord {
    Table,
    UserId,
    Category,
    Track,
    UserName,
    TotalValue,
    CompletedTiers,
    UpdatedAt,
}
