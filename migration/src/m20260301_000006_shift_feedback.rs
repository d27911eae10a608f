use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_profile::Profile;

static FK_SHIFT_FEEDBACK_USER_ID: &str = "fk-shift_feedback-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShiftFeedback::Table)
                    .if_not_exists()
                    .col(pk_auto(ShiftFeedback::Id))
                    .col(integer(ShiftFeedback::UserId))
                    .col(string_len(ShiftFeedback::Shift, 16))
                    .col(text(ShiftFeedback::Note))
                    .col(timestamp(ShiftFeedback::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIFT_FEEDBACK_USER_ID)
                    .from_tbl(ShiftFeedback::Table)
                    .from_col(ShiftFeedback::UserId)
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
                    .name(FK_SHIFT_FEEDBACK_USER_ID)
                    .table(ShiftFeedback::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShiftFeedback::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShiftFeedback {
    Table,
    Id,
    UserId,
    Shift,
    Note,
    CreatedAt,
}
