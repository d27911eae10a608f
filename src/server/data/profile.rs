use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active profile, `email` is stored lowercase
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: String,
        role: Role,
    ) -> Result<entity::profile::Model, DbErr> {
        let profile = entity::profile::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.trim().to_lowercase()),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    pub async fn get(&self, profile_id: i32) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await
    }

    /// Whether at least one owner account exists
    pub async fn owner_exists(&self) -> Result<bool, DbErr> {
        let owners = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Role.eq(Role::Owner))
            .count(self.db)
            .await?;

        Ok(owners > 0)
    }
}
