use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000001_profile::Profile, m20260301_000002_bread_type::BreadType};

static IDX_SALES_LOG_SHIFT_CREATED_AT: &str = "idx-sales_log-shift-created_at";
static FK_SALES_LOG_BREAD_TYPE_ID: &str = "fk-sales_log-bread_type_id";
static FK_SALES_LOG_RECORDED_BY: &str = "fk-sales_log-recorded_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesLog::Table)
                    .if_not_exists()
                    .col(pk_auto(SalesLog::Id))
                    .col(integer(SalesLog::BreadTypeId))
                    .col(integer(SalesLog::Quantity))
                    .col(double(SalesLog::UnitPrice))
                    .col(double(SalesLog::Discount).default(0.0))
                    .col(string_len(SalesLog::Shift, 16))
                    .col(integer(SalesLog::RecordedBy))
                    .col(timestamp(SalesLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SALES_LOG_SHIFT_CREATED_AT)
                    .table(SalesLog::Table)
                    .col(SalesLog::Shift)
                    .col(SalesLog::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SALES_LOG_BREAD_TYPE_ID)
                    .from_tbl(SalesLog::Table)
                    .from_col(SalesLog::BreadTypeId)
                    .to_tbl(BreadType::Table)
                    .to_col(BreadType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SALES_LOG_RECORDED_BY)
                    .from_tbl(SalesLog::Table)
                    .from_col(SalesLog::RecordedBy)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SALES_LOG_RECORDED_BY)
                    .table(SalesLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SALES_LOG_BREAD_TYPE_ID)
                    .table(SalesLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SALES_LOG_SHIFT_CREATED_AT)
                    .table(SalesLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SalesLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SalesLog {
    Table,
    Id,
    BreadTypeId,
    Quantity,
    UnitPrice,
    Discount,
    Shift,
    RecordedBy,
    CreatedAt,
}
