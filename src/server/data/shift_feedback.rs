use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::Shift;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Filters for listing feedback, all optional
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackFilter {
    pub user_id: Option<i32>,
    pub shift: Option<Shift>,
    /// Half-open `[start, end)` creation window
    pub created_between: Option<(NaiveDateTime, NaiveDateTime)>,
}

pub struct ShiftFeedbackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftFeedbackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        shift: Shift,
        note: &str,
    ) -> Result<entity::shift_feedback::Model, DbErr> {
        let feedback = entity::shift_feedback::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            shift: ActiveValue::Set(shift),
            note: ActiveValue::Set(note.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        feedback.insert(self.db).await
    }

    /// Feedback matching `filter`, newest first
    pub async fn list(
        &self,
        filter: &FeedbackFilter,
    ) -> Result<Vec<entity::shift_feedback::Model>, DbErr> {
        let mut query = entity::prelude::ShiftFeedback::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::shift_feedback::Column::UserId.eq(user_id));
        }
        if let Some(shift) = filter.shift {
            query = query.filter(entity::shift_feedback::Column::Shift.eq(shift));
        }
        if let Some((start, end)) = filter.created_between {
            query = query
                .filter(entity::shift_feedback::Column::CreatedAt.gte(start))
                .filter(entity::shift_feedback::Column::CreatedAt.lt(end));
        }

        query
            .order_by_desc(entity::shift_feedback::Column::CreatedAt)
            .order_by_desc(entity::shift_feedback::Column::Id)
            .all(self.db)
            .await
    }
}
