use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{BatchStatus, Shift};
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Validated fields of a batch about to be inserted, everything except its number
#[derive(Clone, Debug, PartialEq)]
pub struct NewBatch {
    pub bread_type_id: i32,
    pub shift: Shift,
    pub status: BatchStatus,
    pub target_quantity: i32,
    pub actual_quantity: i32,
    pub notes: Option<String>,
    pub start_time: NaiveDateTime,
    pub created_by: i32,
}

/// Partial update of a batch, `None` fields are left unchanged
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchChanges {
    pub actual_quantity: Option<i32>,
    pub target_quantity: Option<i32>,
    pub status: Option<BatchStatus>,
    pub notes: Option<String>,
}

pub struct BatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Batch holding the highest number within `(bread_type_id, shift)`.
    ///
    /// Numbers are ordered by length first so `"1000"` sorts after `"999"`.
    pub async fn latest_in_scope(
        &self,
        bread_type_id: i32,
        shift: Shift,
    ) -> Result<Option<entity::batch::Model>, DbErr> {
        entity::prelude::Batch::find()
            .filter(entity::batch::Column::BreadTypeId.eq(bread_type_id))
            .filter(entity::batch::Column::Shift.eq(shift))
            .order_by_desc(SimpleExpr::from(Func::char_length(Expr::col(
                entity::batch::Column::BatchNumber,
            ))))
            .order_by_desc(entity::batch::Column::BatchNumber)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        batch: &NewBatch,
        batch_number: String,
    ) -> Result<entity::batch::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let model = entity::batch::ActiveModel {
            bread_type_id: ActiveValue::Set(batch.bread_type_id),
            batch_number: ActiveValue::Set(batch_number),
            shift: ActiveValue::Set(batch.shift),
            status: ActiveValue::Set(batch.status),
            target_quantity: ActiveValue::Set(batch.target_quantity),
            actual_quantity: ActiveValue::Set(batch.actual_quantity),
            notes: ActiveValue::Set(batch.notes.clone()),
            start_time: ActiveValue::Set(batch.start_time),
            end_time: ActiveValue::Set(finished_at(batch.status, now)),
            created_by: ActiveValue::Set(batch.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Get a batch only if it was created by `user_id`
    pub async fn get_owned(
        &self,
        batch_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::batch::Model>, DbErr> {
        entity::prelude::Batch::find_by_id(batch_id)
            .filter(entity::batch::Column::CreatedBy.eq(user_id))
            .one(self.db)
            .await
    }

    /// Batches created by `user_id`, newest first
    pub async fn list_owned(
        &self,
        user_id: i32,
        status: Option<BatchStatus>,
        shift: Option<Shift>,
    ) -> Result<Vec<entity::batch::Model>, DbErr> {
        let mut query =
            entity::prelude::Batch::find().filter(entity::batch::Column::CreatedBy.eq(user_id));

        if let Some(status) = status {
            query = query.filter(entity::batch::Column::Status.eq(status));
        }
        if let Some(shift) = shift {
            query = query.filter(entity::batch::Column::Shift.eq(shift));
        }

        query
            .order_by_desc(entity::batch::Column::CreatedAt)
            .order_by_desc(entity::batch::Column::Id)
            .all(self.db)
            .await
    }

    /// Batches of every user, optionally restricted to one creator and shift
    pub async fn list(
        &self,
        created_by: Option<i32>,
        shift: Option<Shift>,
    ) -> Result<Vec<entity::batch::Model>, DbErr> {
        let mut query = entity::prelude::Batch::find();

        if let Some(user_id) = created_by {
            query = query.filter(entity::batch::Column::CreatedBy.eq(user_id));
        }
        if let Some(shift) = shift {
            query = query.filter(entity::batch::Column::Shift.eq(shift));
        }

        query
            .order_by_desc(entity::batch::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Batches of `shift` created within `[start, end)`
    pub async fn list_created_between(
        &self,
        shift: Shift,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<entity::batch::Model>, DbErr> {
        entity::prelude::Batch::find()
            .filter(entity::batch::Column::Shift.eq(shift))
            .filter(entity::batch::Column::CreatedAt.gte(start))
            .filter(entity::batch::Column::CreatedAt.lt(end))
            .all(self.db)
            .await
    }

    /// Apply `changes` to `batch`.
    ///
    /// Moving a batch out of `active` stamps its end time, moving it back clears it.
    pub async fn update(
        &self,
        batch: entity::batch::Model,
        changes: BatchChanges,
    ) -> Result<entity::batch::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let previous_status = batch.status;

        let mut batch_am = batch.into_active_model();

        if let Some(actual_quantity) = changes.actual_quantity {
            batch_am.actual_quantity = ActiveValue::Set(actual_quantity);
        }
        if let Some(target_quantity) = changes.target_quantity {
            batch_am.target_quantity = ActiveValue::Set(target_quantity);
        }
        if let Some(notes) = changes.notes {
            batch_am.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(status) = changes.status {
            batch_am.status = ActiveValue::Set(status);

            if status != previous_status {
                batch_am.end_time = ActiveValue::Set(finished_at(status, now));
            }
        }
        batch_am.updated_at = ActiveValue::Set(now);

        batch_am.update(self.db).await
    }

    pub async fn delete(&self, batch_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Batch::delete_by_id(batch_id)
            .exec(self.db)
            .await
    }

    pub async fn count_owned_in_shift(&self, user_id: i32, shift: Shift) -> Result<u64, DbErr> {
        entity::prelude::Batch::find()
            .filter(entity::batch::Column::CreatedBy.eq(user_id))
            .filter(entity::batch::Column::Shift.eq(shift))
            .count(self.db)
            .await
    }

    pub async fn delete_owned_in_shift(
        &self,
        user_id: i32,
        shift: Shift,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Batch::delete_many()
            .filter(entity::batch::Column::CreatedBy.eq(user_id))
            .filter(entity::batch::Column::Shift.eq(shift))
            .exec(self.db)
            .await
    }
}

fn finished_at(status: BatchStatus, now: NaiveDateTime) -> Option<NaiveDateTime> {
    match status {
        BatchStatus::Active => None,
        BatchStatus::Completed | BatchStatus::Cancelled => Some(now),
    }
}
