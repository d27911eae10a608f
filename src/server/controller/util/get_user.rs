use tower_sessions::Session;

use crate::server::{
    data::staff_session::StaffSessionRepository,
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        db::ProfileModel,
        session::{staff::SessionStaffSessionId, user::SessionUserId},
    },
    service::user::UserService,
};

/// Retrieves user information from session and then from database
///
/// Also marks the user's staff session as seen, which keeps them in the staff online count.
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(ProfileModel)`: User found and active
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error::AuthError(AuthError::AccountDisabled))`: User was deactivated since logging in (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<ProfileModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    if !user.is_active {
        session.clear().await;

        return Err(Error::AuthError(AuthError::AccountDisabled(user_id)));
    }

    if let Some(staff_session_id) = SessionStaffSessionId::get(session).await? {
        StaffSessionRepository::new(&state.db)
            .touch(staff_session_id)
            .await?;
    }

    Ok(user)
}
