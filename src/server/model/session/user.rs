use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "bakeshift:user:id";

/// Profile ID of the staff member logged in on this session.
///
/// Only the ID is kept; handlers re-read the profile on every request so a role change or
/// deactivation takes effect immediately.
pub struct SessionUserId;

impl SessionUserId {
    /// Store the profile ID after a successful login.
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.insert(SESSION_USER_ID_KEY, user_id).await?;

        Ok(())
    }

    /// Profile ID of the logged in staff member, `None` for an anonymous session.
    ///
    /// A stored value that is not an ID is reported as a session error.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session.get::<i32>(SESSION_USER_ID_KEY).await?)
    }
}
