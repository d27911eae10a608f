use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::Shift;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Remaining stock count to be written for a date
#[derive(Clone, Debug, PartialEq)]
pub struct RemainingCount {
    pub bread_type_id: i32,
    pub shift: Shift,
    pub quantity: i32,
    pub unit_price: f64,
    pub record_date: NaiveDate,
    pub recorded_by: i32,
}

pub struct RemainingBreadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RemainingBreadRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// The record for `(bread_type_id, shift)` on `record_date`, if any
    pub async fn find_for_date(
        &self,
        bread_type_id: i32,
        shift: Shift,
        record_date: NaiveDate,
    ) -> Result<Option<entity::remaining_bread::Model>, DbErr> {
        entity::prelude::RemainingBread::find()
            .filter(entity::remaining_bread::Column::BreadTypeId.eq(bread_type_id))
            .filter(entity::remaining_bread::Column::Shift.eq(shift))
            .filter(entity::remaining_bread::Column::RecordDate.eq(record_date))
            .one(self.db)
            .await
    }

    /// Most recent record before `before` for `(bread_type_id, shift)` holding exactly `quantity`
    pub async fn latest_before_with_quantity(
        &self,
        bread_type_id: i32,
        shift: Shift,
        before: NaiveDate,
        quantity: i32,
    ) -> Result<Option<entity::remaining_bread::Model>, DbErr> {
        entity::prelude::RemainingBread::find()
            .filter(entity::remaining_bread::Column::BreadTypeId.eq(bread_type_id))
            .filter(entity::remaining_bread::Column::Shift.eq(shift))
            .filter(entity::remaining_bread::Column::RecordDate.lt(before))
            .filter(entity::remaining_bread::Column::Quantity.eq(quantity))
            .order_by_desc(entity::remaining_bread::Column::RecordDate)
            .one(self.db)
            .await
    }

    /// Insert the count or overwrite the existing record for the same
    /// `(bread_type_id, shift, record_date)`.
    pub async fn upsert(
        &self,
        count: &RemainingCount,
    ) -> Result<entity::remaining_bread::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::remaining_bread::ActiveModel {
            bread_type_id: ActiveValue::Set(count.bread_type_id),
            shift: ActiveValue::Set(count.shift),
            quantity: ActiveValue::Set(count.quantity),
            unit_price: ActiveValue::Set(count.unit_price),
            record_date: ActiveValue::Set(count.record_date),
            recorded_by: ActiveValue::Set(count.recorded_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::RemainingBread::insert(model)
            .on_conflict(
                OnConflict::columns([
                    entity::remaining_bread::Column::BreadTypeId,
                    entity::remaining_bread::Column::Shift,
                    entity::remaining_bread::Column::RecordDate,
                ])
                .update_columns([
                    entity::remaining_bread::Column::Quantity,
                    entity::remaining_bread::Column::UnitPrice,
                    entity::remaining_bread::Column::RecordedBy,
                    entity::remaining_bread::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn list_for_date(
        &self,
        record_date: NaiveDate,
        shift: Option<Shift>,
    ) -> Result<Vec<entity::remaining_bread::Model>, DbErr> {
        let mut query = entity::prelude::RemainingBread::find()
            .filter(entity::remaining_bread::Column::RecordDate.eq(record_date));

        if let Some(shift) = shift {
            query = query.filter(entity::remaining_bread::Column::Shift.eq(shift));
        }

        query
            .order_by_asc(entity::remaining_bread::Column::BreadTypeId)
            .all(self.db)
            .await
    }
}
