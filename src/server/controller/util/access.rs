use entity::sea_orm_active_enums::{Role, Shift};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{db::ProfileModel, session::shift::SessionShift},
    util::validate::parse_shift,
};

/// Roles allowed to manage the bakery and see everyone's figures
pub const SUPERVISOR_ROLES: [Role; 2] = [Role::Owner, Role::Manager];

/// Fail with 403 unless `user` holds one of `allowed`.
pub fn require_role(user: &ProfileModel, allowed: &[Role]) -> Result<(), Error> {
    if allowed.contains(&user.role) {
        return Ok(());
    }

    Err(AuthError::AccessDenied {
        user_id: user.id,
        role: user.role,
    }
    .into())
}

/// Shift named by the request, or the session's selected shift when it names none.
pub async fn shift_or_session(raw: Option<&str>, session: &Session) -> Result<Shift, Error> {
    match parse_shift(raw)? {
        Some(shift) => Ok(shift),
        None => SessionShift::get(session).await,
    }
}
