use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000001_profile::Profile, m20260301_000002_bread_type::BreadType};

static IDX_REMAINING_BREAD_SCOPE_DATE: &str = "idx-remaining_bread-bread_type_id-shift-record_date";
static FK_REMAINING_BREAD_BREAD_TYPE_ID: &str = "fk-remaining_bread-bread_type_id";
static FK_REMAINING_BREAD_RECORDED_BY: &str = "fk-remaining_bread-recorded_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RemainingBread::Table)
                    .if_not_exists()
                    .col(pk_auto(RemainingBread::Id))
                    .col(integer(RemainingBread::BreadTypeId))
                    .col(string_len(RemainingBread::Shift, 16))
                    .col(integer(RemainingBread::Quantity))
                    .col(double(RemainingBread::UnitPrice))
                    .col(date(RemainingBread::RecordDate))
                    .col(integer(RemainingBread::RecordedBy))
                    .col(timestamp(RemainingBread::CreatedAt))
                    .col(timestamp(RemainingBread::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REMAINING_BREAD_SCOPE_DATE)
                    .table(RemainingBread::Table)
                    .col(RemainingBread::BreadTypeId)
                    .col(RemainingBread::Shift)
                    .col(RemainingBread::RecordDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REMAINING_BREAD_BREAD_TYPE_ID)
                    .from_tbl(RemainingBread::Table)
                    .from_col(RemainingBread::BreadTypeId)
                    .to_tbl(BreadType::Table)
                    .to_col(BreadType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REMAINING_BREAD_RECORDED_BY)
                    .from_tbl(RemainingBread::Table)
                    .from_col(RemainingBread::RecordedBy)
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
                    .name(FK_REMAINING_BREAD_RECORDED_BY)
                    .table(RemainingBread::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REMAINING_BREAD_BREAD_TYPE_ID)
                    .table(RemainingBread::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REMAINING_BREAD_SCOPE_DATE)
                    .table(RemainingBread::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RemainingBread::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RemainingBread {
    Table,
    Id,
    BreadTypeId,
    Shift,
    Quantity,
    UnitPrice,
    RecordDate,
    RecordedBy,
    CreatedAt,
    UpdatedAt,
}
