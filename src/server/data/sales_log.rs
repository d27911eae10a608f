use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::Shift;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Validated sale about to be recorded
#[derive(Clone, Debug, PartialEq)]
pub struct NewSale {
    pub bread_type_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub discount: f64,
    pub shift: Shift,
    pub recorded_by: i32,
}

pub struct SalesLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SalesLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, sale: &NewSale) -> Result<entity::sales_log::Model, DbErr> {
        let model = entity::sales_log::ActiveModel {
            bread_type_id: ActiveValue::Set(sale.bread_type_id),
            quantity: ActiveValue::Set(sale.quantity),
            unit_price: ActiveValue::Set(sale.unit_price),
            discount: ActiveValue::Set(sale.discount),
            shift: ActiveValue::Set(sale.shift),
            recorded_by: ActiveValue::Set(sale.recorded_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Sales recorded by `user_id`, newest first
    pub async fn list_owned(
        &self,
        user_id: i32,
        shift: Option<Shift>,
    ) -> Result<Vec<entity::sales_log::Model>, DbErr> {
        let mut query = entity::prelude::SalesLog::find()
            .filter(entity::sales_log::Column::RecordedBy.eq(user_id));

        if let Some(shift) = shift {
            query = query.filter(entity::sales_log::Column::Shift.eq(shift));
        }

        query
            .order_by_desc(entity::sales_log::Column::CreatedAt)
            .order_by_desc(entity::sales_log::Column::Id)
            .all(self.db)
            .await
    }

    /// Sales of `shift` recorded within `[start, end)`, optionally by one user only
    pub async fn list_recorded_between(
        &self,
        shift: Shift,
        start: NaiveDateTime,
        end: NaiveDateTime,
        recorded_by: Option<i32>,
    ) -> Result<Vec<entity::sales_log::Model>, DbErr> {
        let mut query = entity::prelude::SalesLog::find()
            .filter(entity::sales_log::Column::Shift.eq(shift))
            .filter(entity::sales_log::Column::CreatedAt.gte(start))
            .filter(entity::sales_log::Column::CreatedAt.lt(end));

        if let Some(user_id) = recorded_by {
            query = query.filter(entity::sales_log::Column::RecordedBy.eq(user_id));
        }

        query.all(self.db).await
    }

    pub async fn delete_owned_in_shift(
        &self,
        user_id: i32,
        shift: Shift,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::SalesLog::delete_many()
            .filter(entity::sales_log::Column::RecordedBy.eq(user_id))
            .filter(entity::sales_log::Column::Shift.eq(shift))
            .exec(self.db)
            .await
    }
}
