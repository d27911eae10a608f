use entity::sea_orm_active_enums::Role;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::CreateUserDto,
    server::{
        config::BootstrapOwner,
        data::profile::ProfileRepository,
        error::{validation::ValidationError, Error},
        model::db::ProfileModel,
        util::validate::{parse_role, require, require_text},
    },
};

/// Shortest password accepted for new accounts
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validated input for a new account.
#[derive(Debug, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationError> {
        let name = require_text(dto.name.as_deref(), "name")?;
        let email = require_text(dto.email.as_deref(), "email")?.to_lowercase();
        if !email.contains('@') {
            return Err(ValidationError::InvalidField {
                field: "email",
                reason: "must be an email address".to_string(),
            });
        }

        let password = require(dto.password, "password")?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::InvalidField {
                field: "password",
                reason: format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            });
        }

        let role = require(parse_role(dto.role.as_deref())?, "role")?;

        Ok(Self {
            name,
            email,
            password,
            role,
        })
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<ProfileModel>, Error> {
        Ok(ProfileRepository::new(self.db).get(user_id).await?)
    }

    /// Create an account with a bcrypt hashed password.
    ///
    /// # Returns
    /// - `Ok(ProfileModel)` - Created account
    /// - `Err(Error::ValidationError)` - Email already in use
    /// - `Err(Error::PasswordHashError)` - Hashing failed
    pub async fn create_user(&self, user: NewUser) -> Result<ProfileModel, Error> {
        let password_hash = bcrypt::hash(&user.password, bcrypt::DEFAULT_COST)?;

        match ProfileRepository::new(self.db)
            .create(&user.name, &user.email, password_hash, user.role)
            .await
        {
            Ok(profile) => Ok(profile),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ValidationError::InvalidField {
                    field: "email",
                    reason: "already in use".to_string(),
                }
                .into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create the configured owner account unless an owner already exists.
    ///
    /// Returns the created account, or `None` when nothing was done.
    pub async fn bootstrap_owner(
        &self,
        owner: &BootstrapOwner,
    ) -> Result<Option<ProfileModel>, Error> {
        if ProfileRepository::new(self.db).owner_exists().await? {
            return Ok(None);
        }

        let profile = self
            .create_user(NewUser {
                name: owner.name.clone(),
                email: owner.email.to_lowercase(),
                password: owner.password.clone(),
                role: Role::Owner,
            })
            .await?;

        tracing::info!("Created bootstrap owner account ID {}", profile.id);

        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {
    mod from_dto {
        use entity::sea_orm_active_enums::Role;

        use crate::{
            model::user::CreateUserDto,
            server::{error::validation::ValidationError, service::user::NewUser},
        };

        fn dto() -> CreateUserDto {
            CreateUserDto {
                name: Some("Ada".to_string()),
                email: Some("Ada@Bakery.test".to_string()),
                password: Some("long enough".to_string()),
                role: Some("manager".to_string()),
            }
        }

        /// Expect a lowercased email and a parsed role
        #[test]
        fn accepts_valid_input() {
            let user = NewUser::from_dto(dto()).unwrap();

            assert_eq!(user.email, "ada@bakery.test");
            assert_eq!(user.role, Role::Manager);
        }

        #[test]
        fn rejects_short_password() {
            let result = NewUser::from_dto(CreateUserDto {
                password: Some("short".to_string()),
                ..dto()
            });

            assert!(matches!(
                result,
                Err(ValidationError::InvalidField { field: "password", .. })
            ));
        }

        #[test]
        fn requires_role() {
            let result = NewUser::from_dto(CreateUserDto {
                role: None,
                ..dto()
            });

            assert_eq!(result, Err(ValidationError::MissingField("role")));
        }
    }

    mod create_user {
        use bakeshift_test_utils::prelude::*;
        use entity::sea_orm_active_enums::Role;

        use crate::server::{
            error::{validation::ValidationError, Error},
            service::user::{NewUser, UserService},
        };

        fn new_user(email: &str) -> NewUser {
            NewUser {
                name: "Ada".to_string(),
                email: email.to_string(),
                password: "long enough".to_string(),
                role: Role::SalesRep,
            }
        }

        /// Expect the stored hash to verify against the original password
        #[tokio::test]
        async fn hashes_password() -> Result<(), TestError> {
            let test = TestBuilder::new().with_bakery_tables().build().await?;

            let profile = UserService::new(&test.db)
                .create_user(new_user("ada@bakery.test"))
                .await
                .unwrap();

            assert_ne!(profile.password_hash, "long enough");
            assert!(bcrypt::verify("long enough", &profile.password_hash).unwrap());

            Ok(())
        }

        /// Expect a validation error for an email which is already registered
        #[tokio::test]
        async fn rejects_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_bakery_tables().build().await?;
            let service = UserService::new(&test.db);

            service.create_user(new_user("ada@bakery.test")).await.unwrap();
            let result = service.create_user(new_user("ada@bakery.test")).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidField { field: "email", .. }))
            ));

            Ok(())
        }
    }

    mod bootstrap_owner {
        use bakeshift_test_utils::prelude::*;
        use entity::sea_orm_active_enums::Role;

        use crate::server::{config::BootstrapOwner, service::user::UserService};

        fn owner() -> BootstrapOwner {
            BootstrapOwner {
                name: "Owner".to_string(),
                email: "owner@bakery.test".to_string(),
                password: "open sesame".to_string(),
            }
        }

        /// Expect the owner to be created once and skipped afterwards
        #[tokio::test]
        async fn creates_owner_once() -> Result<(), TestError> {
            let test = TestBuilder::new().with_bakery_tables().build().await?;
            let service = UserService::new(&test.db);

            let created = service.bootstrap_owner(&owner()).await.unwrap();
            let skipped = service.bootstrap_owner(&owner()).await.unwrap();

            assert_eq!(created.map(|p| p.role), Some(Role::Owner));
            assert!(skipped.is_none());

            Ok(())
        }

        /// Expect nothing to happen when an owner already exists
        #[tokio::test]
        async fn skips_when_owner_exists() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_bakery_tables()
                .with_user("Existing Owner", Role::Owner)
                .build()
                .await?;

            let result = UserService::new(&test.db)
                .bootstrap_owner(&owner())
                .await
                .unwrap();

            assert!(result.is_none());

            Ok(())
        }
    }
}
