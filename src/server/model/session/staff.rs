use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_STAFF_SESSION_KEY: &str = "bakeshift:staff_session:id";

/// ID of the staff session row opened at login, closed again at logout.
pub struct SessionStaffSessionId;

impl SessionStaffSessionId {
    pub async fn insert(session: &Session, staff_session_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_STAFF_SESSION_KEY, staff_session_id)
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session.get::<i32>(SESSION_STAFF_SESSION_KEY).await?)
    }
}
