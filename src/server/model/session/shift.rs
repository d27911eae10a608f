use entity::sea_orm_active_enums::Shift;
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_SHIFT_KEY: &str = "bakeshift:shift";

/// Shift the user selected for this session.
///
/// Requests which omit a shift fall back to this value, and it defaults to
/// [`Shift::Morning`] until the user picks one.
pub struct SessionShift;

impl SessionShift {
    pub async fn insert(session: &Session, shift: Shift) -> Result<(), Error> {
        session.insert(SESSION_SHIFT_KEY, shift).await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Shift, Error> {
        Ok(session
            .get::<Shift>(SESSION_SHIFT_KEY)
            .await?
            .unwrap_or(Shift::Morning))
    }
}
