use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{ActivityType, Role, Shift};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Domain event to be appended to the activity feed
#[derive(Clone, Debug, PartialEq)]
pub struct NewActivity {
    pub user_id: i32,
    pub user_name: String,
    pub user_role: Role,
    pub activity_type: ActivityType,
    pub shift: Option<Shift>,
    pub message: String,
    pub metadata: Option<serde_json::Value>,
}

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, activity: NewActivity) -> Result<entity::activity::Model, DbErr> {
        let model = entity::activity::ActiveModel {
            user_id: ActiveValue::Set(activity.user_id),
            user_name: ActiveValue::Set(activity.user_name),
            user_role: ActiveValue::Set(activity.user_role),
            activity_type: ActiveValue::Set(activity.activity_type),
            shift: ActiveValue::Set(activity.shift),
            message: ActiveValue::Set(activity.message),
            metadata: ActiveValue::Set(activity.metadata),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Events created at or after `since`, newest first, optionally for one user only
    pub async fn list_since(
        &self,
        since: NaiveDateTime,
        user_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::activity::Model>, DbErr> {
        let mut query = entity::prelude::Activity::find()
            .filter(entity::activity::Column::CreatedAt.gte(since));

        if let Some(user_id) = user_id {
            query = query.filter(entity::activity::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(entity::activity::Column::CreatedAt)
            .order_by_desc(entity::activity::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Deletes every event created before `cutoff`
    pub async fn delete_before(&self, cutoff: NaiveDateTime) -> Result<DeleteResult, DbErr> {
        entity::prelude::Activity::delete_many()
            .filter(entity::activity::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await
    }
}
