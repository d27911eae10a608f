use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct BreadTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BreadTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        unit_price: f64,
    ) -> Result<entity::bread_type::Model, DbErr> {
        let bread_type = entity::bread_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            unit_price: ActiveValue::Set(unit_price),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        bread_type.insert(self.db).await
    }

    pub async fn get(
        &self,
        bread_type_id: i32,
    ) -> Result<Option<entity::bread_type::Model>, DbErr> {
        entity::prelude::BreadType::find_by_id(bread_type_id)
            .one(self.db)
            .await
    }

    /// Active bread types ordered by name
    pub async fn get_active(&self) -> Result<Vec<entity::bread_type::Model>, DbErr> {
        entity::prelude::BreadType::find()
            .filter(entity::bread_type::Column::IsActive.eq(true))
            .order_by_asc(entity::bread_type::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_many(
        &self,
        bread_type_ids: &[i32],
    ) -> Result<Vec<entity::bread_type::Model>, DbErr> {
        entity::prelude::BreadType::find()
            .filter(entity::bread_type::Column::Id.is_in(bread_type_ids.iter().copied()))
            .order_by_asc(entity::bread_type::Column::Name)
            .all(self.db)
            .await
    }
}
