use sea_orm::DatabaseConnection;

use crate::server::{error::Error, service::activity::ActivityService};

/// Delete activity older than the retention window, returning how many events were removed.
pub async fn cleanup_activity(db: DatabaseConnection) -> Result<u64, Error> {
    ActivityService::new(&db).cleanup().await
}
