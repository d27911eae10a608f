use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ActivityType, Shift};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::shift::{CurrentShiftDto, EndShiftResultDto},
    server::{
        data::{batch::BatchRepository, sales_log::SalesLogRepository},
        error::Error,
        model::db::ProfileModel,
        service::activity::{ActivityLogger, NewActivity},
        util::shift::ShiftClock,
    },
};

/// Describe the session's selected shift alongside the shift the clock is in.
pub fn current_shift(selected: Shift, clock: &ShiftClock, now: DateTime<Utc>) -> CurrentShiftDto {
    let window = clock.window_containing(now);

    CurrentShiftDto {
        selected,
        clock_shift: window.shift,
        shift_date: window.date,
        window_start: window.start,
        window_end: window.end,
    }
}

pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Delete the actor's batches and sales of `shift`.
    ///
    /// Both deletes run in one transaction so a shift is never left half cleared.
    pub async fn end_shift(
        &self,
        actor: &ProfileModel,
        shift: Shift,
        activity: &ActivityLogger,
    ) -> Result<EndShiftResultDto, Error> {
        let txn = self.db.begin().await?;

        let batches = BatchRepository::new(&txn)
            .delete_owned_in_shift(actor.id, shift)
            .await?;
        let sales = SalesLogRepository::new(&txn)
            .delete_owned_in_shift(actor.id, shift)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User ID {} ended the {:?} shift, deleted {} batches and {} sales",
            actor.id,
            shift,
            batches.rows_affected,
            sales.rows_affected
        );

        activity.log(
            NewActivity::new(
                actor,
                ActivityType::ShiftEnded,
                format!("{} ended the {:?} shift", actor.name, shift),
            )
            .with_shift(shift)
            .with_metadata(serde_json::json!({
                "batches_deleted": batches.rows_affected,
                "sales_deleted": sales.rows_affected,
            })),
        );

        Ok(EndShiftResultDto {
            shift,
            batches_deleted: batches.rows_affected,
            sales_deleted: sales.rows_affected,
        })
    }
}

#[cfg(test)]
mod tests {
    mod current_shift {
        use chrono::{NaiveDate, TimeZone, Utc};
        use entity::sea_orm_active_enums::Shift;

        use crate::server::{service::shift::current_shift, util::shift::ShiftClock};

        /// Expect the clock's night shift to be reported while the session keeps morning
        #[test]
        fn reports_clock_and_selection_separately() {
            // 01:30 local on 2025-03-11 belongs to the night shift of 2025-03-10
            let now = Utc.with_ymd_and_hms(2025, 3, 11, 0, 30, 0).unwrap();

            let current = current_shift(Shift::Morning, &ShiftClock::default(), now);

            assert_eq!(current.selected, Shift::Morning);
            assert_eq!(current.clock_shift, Shift::Night);
            assert_eq!(
                current.shift_date,
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
            );
            assert!(current.window_start <= now && now < current.window_end);
        }
    }

    mod end_shift {
        use bakeshift_test_utils::prelude::*;
        use chrono::Utc;
        use entity::sea_orm_active_enums::{Role, Shift};
        use sea_orm::EntityTrait;

        use crate::server::service::{activity::ActivityLogger, shift::ShiftService};

        /// Expect only the actor's records of the ended shift to be deleted
        #[tokio::test]
        async fn deletes_own_records_of_shift() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_bakery_tables()
                .with_user("Baker", Role::SalesRep)
                .with_user("Other Baker", Role::SalesRep)
                .with_bread_type("Agege", 500.0)
                .build()
                .await?;
            let now = Utc::now().naive_utc();

            test.bakery().insert_batch(1, 1, Shift::Morning, "001").await?;
            test.bakery().insert_batch(1, 1, Shift::Night, "001").await?;
            test.bakery().insert_batch(1, 2, Shift::Morning, "002").await?;
            test.bakery().insert_sale(1, 1, Shift::Morning, 4, now).await?;
            test.bakery().insert_sale(1, 2, Shift::Morning, 1, now).await?;

            let actor = entity::prelude::Profile::find_by_id(1)
                .one(&test.db)
                .await?
                .unwrap();

            let result = ShiftService::new(&test.db)
                .end_shift(&actor, Shift::Morning, &ActivityLogger::new(test.db.clone()))
                .await
                .unwrap();

            assert_eq!(result.batches_deleted, 1);
            assert_eq!(result.sales_deleted, 1);
            assert_eq!(entity::prelude::Batch::find().all(&test.db).await?.len(), 2);
            assert_eq!(entity::prelude::SalesLog::find().all(&test.db).await?.len(), 1);

            Ok(())
        }
    }
}
