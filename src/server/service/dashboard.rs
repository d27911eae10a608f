use chrono::{TimeDelta, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{data::staff_session::StaffSessionRepository, error::Error};

/// Staff seen within this many minutes count as online
pub const ONLINE_WINDOW_MINUTES: i64 = 15;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Distinct users with an open staff session seen within the online window.
    pub async fn staff_online(&self) -> Result<u64, Error> {
        let since = Utc::now().naive_utc() - TimeDelta::minutes(ONLINE_WINDOW_MINUTES);

        Ok(StaffSessionRepository::new(self.db)
            .count_online_users(since)
            .await?)
    }
}
