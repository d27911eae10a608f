//! Best-effort activity feed.
//!
//! [`ActivityLogger`] writes events on a spawned task so the request that produced them
//! never waits on, or fails because of, the feed. [`ActivityService`] reads the feed with
//! role-based filtering and prunes old events.

use chrono::{TimeDelta, Utc};
use entity::sea_orm_active_enums::{ActivityType, Role, Shift};
use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;

use crate::server::{
    data::activity::ActivityRepository,
    error::Error,
    model::db::{ActivityModel, ProfileModel},
};

pub use crate::server::data::activity::NewActivity;

/// Events older than this many days are hidden from the feed and deleted by cleanup
pub const ACTIVITY_RETENTION_DAYS: i64 = 3;

/// Maximum number of events returned by the feed
pub const ACTIVITY_FEED_LIMIT: u64 = 200;

impl NewActivity {
    /// Event attributed to `actor`, without shift or metadata.
    pub fn new(actor: &ProfileModel, activity_type: ActivityType, message: impl Into<String>) -> Self {
        Self {
            user_id: actor.id,
            user_name: actor.name.clone(),
            user_role: actor.role,
            activity_type,
            shift: None,
            message: message.into(),
            metadata: None,
        }
    }

    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = Some(shift);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Fire-and-forget writer for the activity feed.
#[derive(Clone)]
pub struct ActivityLogger {
    db: DatabaseConnection,
}

impl ActivityLogger {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persist `activity` on a background task.
    ///
    /// Failures are logged and discarded. The returned handle may be dropped; awaiting it
    /// only tells whether the write went through.
    pub fn log(&self, activity: NewActivity) -> JoinHandle<bool> {
        let db = self.db.clone();

        tokio::spawn(async move {
            let activity_type = activity.activity_type;
            let user_id = activity.user_id;

            match ActivityRepository::new(&db).create(activity).await {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(
                        "Failed to record {:?} activity for user ID {}: {}",
                        activity_type,
                        user_id,
                        e
                    );
                    false
                }
            }
        })
    }
}

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Events visible to `viewer` within the retention window, newest first.
    ///
    /// Managers only see their own events; owners and sales reps see everyone's.
    pub async fn list_for(&self, viewer: &ProfileModel) -> Result<Vec<ActivityModel>, Error> {
        let since = Utc::now().naive_utc() - TimeDelta::days(ACTIVITY_RETENTION_DAYS);

        let user_filter = match viewer.role {
            Role::Manager => Some(viewer.id),
            Role::Owner | Role::SalesRep => None,
        };

        let activities = ActivityRepository::new(self.db)
            .list_since(since, user_filter, ACTIVITY_FEED_LIMIT)
            .await?;

        Ok(activities)
    }

    /// Delete events older than the retention window, returning how many were removed.
    pub async fn cleanup(&self) -> Result<u64, Error> {
        let cutoff = Utc::now().naive_utc() - TimeDelta::days(ACTIVITY_RETENTION_DAYS);

        let result = ActivityRepository::new(self.db).delete_before(cutoff).await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    mod log {
        use bakeshift_test_utils::prelude::*;
        use entity::sea_orm_active_enums::{ActivityType, Role, Shift};
        use sea_orm::EntityTrait;

        use crate::server::service::activity::{ActivityLogger, NewActivity};

        /// Expect the event to be written by the spawned task
        #[tokio::test]
        async fn persists_activity() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_bakery_tables()
                .with_user("Baker", Role::SalesRep)
                .build()
                .await?;
            let actor = entity::prelude::Profile::find_by_id(1)
                .one(&test.db)
                .await?
                .unwrap();

            let written = ActivityLogger::new(test.db.clone())
                .log(
                    NewActivity::new(&actor, ActivityType::BatchCreated, "Created batch 001")
                        .with_shift(Shift::Morning)
                        .with_metadata(serde_json::json!({ "batch_number": "001" })),
                )
                .await
                .unwrap();

            assert!(written);

            let stored = entity::prelude::Activity::find().all(&test.db).await?;
            assert_eq!(stored.len(), 1);
            assert_eq!(stored[0].user_name, "Baker");
            assert_eq!(stored[0].shift, Some(Shift::Morning));

            Ok(())
        }

        /// Expect a failed write to be swallowed rather than panicking the task
        #[tokio::test]
        async fn swallows_write_failure() -> Result<(), TestError> {
            // No tables, so the insert fails
            let test = TestBuilder::new().build().await?;

            let activity = NewActivity {
                user_id: 1,
                user_name: "Ghost".to_string(),
                user_role: Role::SalesRep,
                activity_type: ActivityType::Login,
                shift: None,
                message: "Logged in".to_string(),
                metadata: None,
            };

            let result = ActivityLogger::new(test.db.clone()).log(activity).await;

            assert!(matches!(result, Ok(false)));

            Ok(())
        }
    }

    mod list_for {
        use bakeshift_test_utils::prelude::*;
        use chrono::{TimeDelta, Utc};
        use entity::sea_orm_active_enums::{ActivityType, Role};
        use sea_orm::EntityTrait;

        use crate::server::service::activity::ActivityService;

        async fn setup() -> Result<TestContext, TestError> {
            let mut test = TestBuilder::new()
                .with_bakery_tables()
                .with_user("Owner", Role::Owner)
                .with_user("Manager", Role::Manager)
                .with_user("Seller", Role::SalesRep)
                .build()
                .await?;
            let now = Utc::now().naive_utc();

            test.bakery()
                .insert_activity(1, Role::Owner, ActivityType::Login, now - TimeDelta::hours(3))
                .await?;
            test.bakery()
                .insert_activity(2, Role::Manager, ActivityType::BatchCreated, now - TimeDelta::hours(2))
                .await?;
            test.bakery()
                .insert_activity(3, Role::SalesRep, ActivityType::SaleRecorded, now - TimeDelta::hours(1))
                .await?;
            test.bakery()
                .insert_activity(2, Role::Manager, ActivityType::Logout, now - TimeDelta::days(4))
                .await?;

            Ok(test)
        }

        /// Expect a manager to only see their own events within the window
        #[tokio::test]
        async fn manager_sees_own_events() -> Result<(), TestError> {
            let test = setup().await?;
            let manager = entity::prelude::Profile::find_by_id(2)
                .one(&test.db)
                .await?
                .unwrap();

            let activities = ActivityService::new(&test.db).list_for(&manager).await.unwrap();

            assert_eq!(activities.len(), 1);
            assert_eq!(activities[0].activity_type, ActivityType::BatchCreated);

            Ok(())
        }

        /// Expect other roles to see all recent events, newest first
        #[tokio::test]
        async fn others_see_all_recent_events() -> Result<(), TestError> {
            let test = setup().await?;

            for user_id in [1, 3] {
                let viewer = entity::prelude::Profile::find_by_id(user_id)
                    .one(&test.db)
                    .await?
                    .unwrap();

                let types: Vec<ActivityType> = ActivityService::new(&test.db)
                    .list_for(&viewer)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|a| a.activity_type)
                    .collect();

                assert_eq!(
                    types,
                    vec![
                        ActivityType::SaleRecorded,
                        ActivityType::BatchCreated,
                        ActivityType::Login
                    ]
                );
            }

            Ok(())
        }

        /// Expect cleanup to remove only events past the retention window
        #[tokio::test]
        async fn cleanup_removes_expired_events() -> Result<(), TestError> {
            let test = setup().await?;

            let removed = ActivityService::new(&test.db).cleanup().await.unwrap();

            assert_eq!(removed, 1);
            assert_eq!(entity::prelude::Activity::find().all(&test.db).await?.len(), 3);

            Ok(())
        }
    }
}
