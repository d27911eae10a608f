//! Email and password login.
//!
//! A successful login opens a staff session row which backs the "staff online" count. The
//! row's ID is kept in the cookie session next to the user ID so logout can close it.

use entity::sea_orm_active_enums::ActivityType;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::LoginDto,
    server::{
        data::{profile::ProfileRepository, staff_session::StaffSessionRepository},
        error::{auth::AuthError, Error},
        model::db::ProfileModel,
        service::activity::{ActivityLogger, NewActivity},
        util::validate::{require, require_text},
    },
};

/// Result of a successful login
#[derive(Debug)]
pub struct LoginResult {
    pub user: ProfileModel,
    pub staff_session_id: i32,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verify credentials and open a staff session.
    ///
    /// Unknown emails and wrong passwords produce the same error so the response does not
    /// reveal which accounts exist.
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Credentials valid and account active
    /// - `Err(Error::ValidationError)` - Email or password missing
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::AuthError(AuthError::AccountDisabled))` - Account deactivated
    pub async fn login(
        &self,
        dto: LoginDto,
        activity: &ActivityLogger,
    ) -> Result<LoginResult, Error> {
        let email = require_text(dto.email.as_deref(), "email")?;
        let password = require(dto.password, "password")?;

        let Some(user) = ProfileRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        let staff_session = StaffSessionRepository::new(self.db).open(user.id).await?;

        activity.log(NewActivity::new(
            &user,
            ActivityType::Login,
            format!("{} logged in", user.name),
        ));

        Ok(LoginResult {
            user,
            staff_session_id: staff_session.id,
        })
    }

    /// Close the staff session opened at login, if there is one.
    pub async fn logout(
        &self,
        user_id: i32,
        staff_session_id: Option<i32>,
        activity: &ActivityLogger,
    ) -> Result<(), Error> {
        if let Some(staff_session_id) = staff_session_id {
            StaffSessionRepository::new(self.db)
                .close(staff_session_id)
                .await?;
        }

        if let Some(user) = ProfileRepository::new(self.db).get(user_id).await? {
            activity.log(NewActivity::new(
                &user,
                ActivityType::Logout,
                format!("{} logged out", user.name),
            ));
        }

        Ok(())
    }
}
