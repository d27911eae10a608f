use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACTIVITY_CREATED_AT: &str = "idx-activity-created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(integer(Activity::UserId))
                    .col(string(Activity::UserName))
                    .col(string_len(Activity::UserRole, 16))
                    .col(string_len(Activity::ActivityType, 32))
                    .col(string_len_null(Activity::Shift, 16))
                    .col(text(Activity::Message))
                    .col(json_null(Activity::Metadata))
                    .col(timestamp(Activity::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Feed reads and retention cleanup both range over created_at
        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTIVITY_CREATED_AT)
                    .table(Activity::Table)
                    .col(Activity::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTIVITY_CREATED_AT)
                    .table(Activity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Activity {
    Table,
    Id,
    UserId,
    UserName,
    UserRole,
    ActivityType,
    Shift,
    Message,
    Metadata,
    CreatedAt,
}
