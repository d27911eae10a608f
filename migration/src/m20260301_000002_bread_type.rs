use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BreadType::Table)
                    .if_not_exists()
                    .col(pk_auto(BreadType::Id))
                    .col(string_uniq(BreadType::Name))
                    .col(double(BreadType::UnitPrice))
                    .col(boolean(BreadType::IsActive).default(true))
                    .col(timestamp(BreadType::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BreadType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BreadType {
    Table,
    Id,
    Name,
    UnitPrice,
    IsActive,
    CreatedAt,
}
