use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000001_profile::Profile, m20260301_000002_bread_type::BreadType};

static IDX_BATCH_SCOPE_NUMBER: &str = "idx-batch-bread_type_id-shift-batch_number";
static IDX_BATCH_CREATED_BY: &str = "idx-batch-created_by";
static FK_BATCH_BREAD_TYPE_ID: &str = "fk-batch-bread_type_id";
static FK_BATCH_CREATED_BY: &str = "fk-batch-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Batch::Table)
                    .if_not_exists()
                    .col(pk_auto(Batch::Id))
                    .col(integer(Batch::BreadTypeId))
                    .col(string_len(Batch::BatchNumber, 16))
                    .col(string_len(Batch::Shift, 16))
                    .col(string_len(Batch::Status, 16))
                    .col(integer(Batch::TargetQuantity))
                    .col(integer(Batch::ActualQuantity))
                    .col(text_null(Batch::Notes))
                    .col(timestamp(Batch::StartTime))
                    .col(timestamp_null(Batch::EndTime))
                    .col(integer(Batch::CreatedBy))
                    .col(timestamp(Batch::CreatedAt))
                    .col(timestamp(Batch::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Batch numbers are assigned inside a transaction which retries on this
        // index's violation, making it the source of truth for uniqueness.
        manager
            .create_index(
                Index::create()
                    .name(IDX_BATCH_SCOPE_NUMBER)
                    .table(Batch::Table)
                    .col(Batch::BreadTypeId)
                    .col(Batch::Shift)
                    .col(Batch::BatchNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BATCH_CREATED_BY)
                    .table(Batch::Table)
                    .col(Batch::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BATCH_BREAD_TYPE_ID)
                    .from_tbl(Batch::Table)
                    .from_col(Batch::BreadTypeId)
                    .to_tbl(BreadType::Table)
                    .to_col(BreadType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BATCH_CREATED_BY)
                    .from_tbl(Batch::Table)
                    .from_col(Batch::CreatedBy)
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
                    .name(FK_BATCH_CREATED_BY)
                    .table(Batch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BATCH_BREAD_TYPE_ID)
                    .table(Batch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BATCH_CREATED_BY)
                    .table(Batch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BATCH_SCOPE_NUMBER)
                    .table(Batch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Batch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Batch {
    Table,
    Id,
    BreadTypeId,
    BatchNumber,
    Shift,
    Status,
    TargetQuantity,
    ActualQuantity,
    Notes,
    StartTime,
    EndTime,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
