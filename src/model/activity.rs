use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{ActivityType, Role, Shift};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActivityDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub user_role: Role,
    pub activity_type: ActivityType,
    pub shift: Option<Shift>,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
}

impl From<entity::activity::Model> for ActivityDto {
    fn from(activity: entity::activity::Model) -> Self {
        Self {
            id: activity.id,
            user_id: activity.user_id,
            user_name: activity.user_name,
            user_role: activity.user_role,
            activity_type: activity.activity_type,
            shift: activity.shift,
            message: activity.message,
            metadata: activity.metadata,
            created_at: activity.created_at,
        }
    }
}
