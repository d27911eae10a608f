use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{ActivityType, BatchStatus, Role, Shift};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{
        ActivityModel, BatchModel, BreadTypeModel, RemainingBreadModel, SalesLogModel,
        ShiftFeedbackModel,
    },
    TestContext,
};

impl TestContext {
    pub fn bakery<'a>(&'a mut self) -> BakeryFixtures<'a> {
        BakeryFixtures { setup: self }
    }
}

pub struct BakeryFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> BakeryFixtures<'a> {
    pub async fn insert_bread_type(
        &self,
        name: &str,
        unit_price: f64,
    ) -> Result<BreadTypeModel, TestError> {
        Ok(
            entity::prelude::BreadType::insert(entity::bread_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                unit_price: ActiveValue::Set(unit_price),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an active batch created now.
    pub async fn insert_batch(
        &self,
        bread_type_id: i32,
        created_by: i32,
        shift: Shift,
        batch_number: &str,
    ) -> Result<BatchModel, TestError> {
        self.insert_batch_with(
            bread_type_id,
            created_by,
            shift,
            batch_number,
            BatchStatus::Active,
            (10, 10),
            Utc::now().naive_utc(),
        )
        .await
    }

    /// Insert a batch with explicit status, `(target, actual)` quantities and creation time.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_batch_with(
        &self,
        bread_type_id: i32,
        created_by: i32,
        shift: Shift,
        batch_number: &str,
        status: BatchStatus,
        quantities: (i32, i32),
        created_at: NaiveDateTime,
    ) -> Result<BatchModel, TestError> {
        let (target_quantity, actual_quantity) = quantities;

        Ok(
            entity::prelude::Batch::insert(entity::batch::ActiveModel {
                bread_type_id: ActiveValue::Set(bread_type_id),
                batch_number: ActiveValue::Set(batch_number.to_string()),
                shift: ActiveValue::Set(shift),
                status: ActiveValue::Set(status),
                target_quantity: ActiveValue::Set(target_quantity),
                actual_quantity: ActiveValue::Set(actual_quantity),
                notes: ActiveValue::Set(None),
                start_time: ActiveValue::Set(created_at),
                end_time: ActiveValue::Set(None),
                created_by: ActiveValue::Set(created_by),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_sale(
        &self,
        bread_type_id: i32,
        recorded_by: i32,
        shift: Shift,
        quantity: i32,
        created_at: NaiveDateTime,
    ) -> Result<SalesLogModel, TestError> {
        Ok(
            entity::prelude::SalesLog::insert(entity::sales_log::ActiveModel {
                bread_type_id: ActiveValue::Set(bread_type_id),
                quantity: ActiveValue::Set(quantity),
                unit_price: ActiveValue::Set(100.0),
                discount: ActiveValue::Set(0.0),
                shift: ActiveValue::Set(shift),
                recorded_by: ActiveValue::Set(recorded_by),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_remaining(
        &self,
        bread_type_id: i32,
        recorded_by: i32,
        shift: Shift,
        quantity: i32,
        record_date: NaiveDate,
    ) -> Result<RemainingBreadModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::RemainingBread::insert(entity::remaining_bread::ActiveModel {
                bread_type_id: ActiveValue::Set(bread_type_id),
                shift: ActiveValue::Set(shift),
                quantity: ActiveValue::Set(quantity),
                unit_price: ActiveValue::Set(100.0),
                record_date: ActiveValue::Set(record_date),
                recorded_by: ActiveValue::Set(recorded_by),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_feedback(
        &self,
        user_id: i32,
        shift: Shift,
        note: &str,
        created_at: NaiveDateTime,
    ) -> Result<ShiftFeedbackModel, TestError> {
        Ok(
            entity::prelude::ShiftFeedback::insert(entity::shift_feedback::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                shift: ActiveValue::Set(shift),
                note: ActiveValue::Set(note.to_string()),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_activity(
        &self,
        user_id: i32,
        user_role: Role,
        activity_type: ActivityType,
        created_at: NaiveDateTime,
    ) -> Result<ActivityModel, TestError> {
        Ok(
            entity::prelude::Activity::insert(entity::activity::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                user_name: ActiveValue::Set(format!("User {}", user_id)),
                user_role: ActiveValue::Set(user_role),
                activity_type: ActiveValue::Set(activity_type),
                shift: ActiveValue::Set(None),
                message: ActiveValue::Set("fixture activity".to_string()),
                metadata: ActiveValue::Set(Some(serde_json::json!({ "fixture": true }))),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
