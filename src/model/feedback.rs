use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::Shift;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShiftFeedbackDto {
    pub id: i32,
    pub user_id: i32,
    pub shift: Shift,
    pub note: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::shift_feedback::Model> for ShiftFeedbackDto {
    fn from(feedback: entity::shift_feedback::Model) -> Self {
        Self {
            id: feedback.id,
            user_id: feedback.user_id,
            shift: feedback.shift,
            note: feedback.note,
            created_at: feedback.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateFeedbackDto {
    /// Defaults to the session's shift
    pub shift: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct FeedbackQuery {
    pub user_id: Option<i32>,
    pub shift: Option<String>,
    /// Local calendar date, `YYYY-MM-DD`
    pub date: Option<String>,
}
