use sea_orm::DatabaseConnection;

use crate::server::{service::activity::ActivityLogger, util::shift::ShiftClock};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub shift_clock: ShiftClock,
    pub activity: ActivityLogger,
}

impl AppState {
    pub fn new(db: DatabaseConnection, shift_clock: ShiftClock) -> Self {
        let activity = ActivityLogger::new(db.clone());

        Self {
            db,
            shift_clock,
            activity,
        }
    }
}

/// State with the canonical shift boundaries, used by tests.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, ShiftClock::default())
    }
}
