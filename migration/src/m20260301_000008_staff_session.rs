use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_profile::Profile;

static IDX_STAFF_SESSION_LAST_SEEN_AT: &str = "idx-staff_session-last_seen_at";
static FK_STAFF_SESSION_USER_ID: &str = "fk-staff_session-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffSession::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffSession::Id))
                    .col(integer(StaffSession::UserId))
                    .col(timestamp(StaffSession::StartedAt))
                    .col(timestamp(StaffSession::LastSeenAt))
                    .col(timestamp_null(StaffSession::EndedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STAFF_SESSION_LAST_SEEN_AT)
                    .table(StaffSession::Table)
                    .col(StaffSession::LastSeenAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STAFF_SESSION_USER_ID)
                    .from_tbl(StaffSession::Table)
                    .from_col(StaffSession::UserId)
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
                    .name(FK_STAFF_SESSION_USER_ID)
                    .table(StaffSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STAFF_SESSION_LAST_SEEN_AT)
                    .table(StaffSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StaffSession::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StaffSession {
    Table,
    Id,
    UserId,
    StartedAt,
    LastSeenAt,
    EndedAt,
}
