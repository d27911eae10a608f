use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, UpdateResult,
};

pub struct StaffSessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StaffSessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a session for `user_id` starting now
    pub async fn open(&self, user_id: i32) -> Result<entity::staff_session::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let session = entity::staff_session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            started_at: ActiveValue::Set(now),
            last_seen_at: ActiveValue::Set(now),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        };

        session.insert(self.db).await
    }

    /// Marks an open session as seen now, closed sessions are left untouched
    pub async fn touch(&self, staff_session_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::StaffSession::update_many()
            .col_expr(
                entity::staff_session::Column::LastSeenAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::staff_session::Column::Id.eq(staff_session_id))
            .filter(entity::staff_session::Column::EndedAt.is_null())
            .exec(self.db)
            .await
    }

    pub async fn close(&self, staff_session_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::StaffSession::update_many()
            .col_expr(
                entity::staff_session::Column::EndedAt,
                Expr::value(Some(Utc::now().naive_utc())),
            )
            .filter(entity::staff_session::Column::Id.eq(staff_session_id))
            .filter(entity::staff_session::Column::EndedAt.is_null())
            .exec(self.db)
            .await
    }

    /// Number of distinct users with an open session seen at or after `since`
    pub async fn count_online_users(&self, since: NaiveDateTime) -> Result<u64, DbErr> {
        entity::prelude::StaffSession::find()
            .select_only()
            .column(entity::staff_session::Column::UserId)
            .distinct()
            .filter(entity::staff_session::Column::EndedAt.is_null())
            .filter(entity::staff_session::Column::LastSeenAt.gte(since))
            .count(self.db)
            .await
    }
}
