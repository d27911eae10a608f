use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_EMAIL_DOMAIN, TEST_PASSWORD},
    error::TestError,
    model::{ProfileModel, StaffSessionModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

/// Email address a fixture user named `name` is created with.
pub fn test_email(name: &str) -> String {
    format!(
        "{}@{}",
        name.to_lowercase().replace(' ', "."),
        TEST_EMAIL_DOMAIN
    )
}

impl<'a> UserFixtures<'a> {
    /// Insert an active profile with [`TEST_PASSWORD`] as its password.
    pub async fn insert_user(&self, name: &str, role: Role) -> Result<ProfileModel, TestError> {
        self.insert_user_with_status(name, role, true).await
    }

    /// Insert a profile which may be deactivated.
    pub async fn insert_user_with_status(
        &self,
        name: &str,
        role: Role,
        is_active: bool,
    ) -> Result<ProfileModel, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?;

        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(test_email(name)),
                password_hash: ActiveValue::Set(password_hash),
                role: ActiveValue::Set(role),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a staff session; `ended_at` of `None` marks it as still open.
    pub async fn insert_staff_session(
        &self,
        user_id: i32,
        last_seen_at: NaiveDateTime,
        ended_at: Option<NaiveDateTime>,
    ) -> Result<StaffSessionModel, TestError> {
        Ok(
            entity::prelude::StaffSession::insert(entity::staff_session::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                started_at: ActiveValue::Set(last_seen_at),
                last_seen_at: ActiveValue::Set(last_seen_at),
                ended_at: ActiveValue::Set(ended_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
