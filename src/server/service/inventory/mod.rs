//! Remaining stock reconciliation and available stock.

pub mod conflict;

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{ActivityType, Shift};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::inventory::{
        AvailableStockDto, ConflictReportDto, RemainingBreadRequestDto, StockLevelDto,
    },
    server::{
        data::{
            batch::BatchRepository,
            bread_type::BreadTypeRepository,
            remaining_bread::{RemainingBreadRepository, RemainingCount},
            sales_log::SalesLogRepository,
        },
        error::{validation::ValidationError, Error},
        model::db::{ProfileModel, RemainingBreadModel},
        service::{
            activity::{ActivityLogger, NewActivity},
            inventory::conflict::{ConflictCandidate, ConflictChecker},
            stats::available_stock,
        },
        util::{
            shift::ShiftClock,
            validate::{non_negative, parse_shift},
        },
    },
};

/// Validated remaining stock submission
#[derive(Clone, Debug, PartialEq)]
pub struct RemainingSubmission {
    pub shift: Shift,
    pub candidates: Vec<ConflictCandidate>,
    pub confirmed: bool,
}

impl RemainingSubmission {
    /// Validate `dto`, falling back to `session_shift` when it names no shift.
    ///
    /// Rejects empty submissions, negative quantities and a bread type listed twice.
    pub fn from_dto(
        dto: RemainingBreadRequestDto,
        session_shift: Shift,
        recorded_by: i32,
    ) -> Result<Self, ValidationError> {
        let shift = parse_shift(dto.shift.as_deref())?.unwrap_or(session_shift);

        if dto.items.is_empty() {
            return Err(ValidationError::MissingField("items"));
        }

        let mut seen = HashSet::new();
        let mut candidates = Vec::with_capacity(dto.items.len());

        for item in dto.items {
            non_negative(item.quantity, "quantity")?;

            if !seen.insert(item.bread_type_id) {
                return Err(ValidationError::InvalidField {
                    field: "items",
                    reason: format!("bread type {} is listed more than once", item.bread_type_id),
                });
            }

            candidates.push(ConflictCandidate {
                bread_type_id: item.bread_type_id,
                shift,
                quantity: item.quantity,
                recorded_by,
            });
        }

        Ok(Self {
            shift,
            candidates,
            confirmed: dto.confirmed,
        })
    }
}

/// Result of writing a remaining stock submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was written, the caller must confirm the listed conflicts first
    NeedsConfirmation(ConflictReportDto),
    Saved(Vec<RemainingBreadModel>),
}

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a ShiftClock,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a ShiftClock) -> Self {
        Self { db, clock }
    }

    /// Check a submission for likely duplicates against today's local date.
    pub async fn check(
        &self,
        submission: &RemainingSubmission,
        now: DateTime<Utc>,
    ) -> Result<ConflictReportDto, Error> {
        let today = self.clock.local_date(now);

        ConflictChecker::new(self.db)
            .check(today, &submission.candidates)
            .await
    }

    /// Check then write a submission in one transaction.
    ///
    /// Unconfirmed submissions with conflicts are rolled back untouched. Otherwise each
    /// count is upserted on `(bread_type_id, shift, record_date)`, so concurrent
    /// submissions for the same scope resolve to the last write.
    pub async fn submit(
        &self,
        actor: &ProfileModel,
        submission: RemainingSubmission,
        now: DateTime<Utc>,
        activity: &ActivityLogger,
    ) -> Result<SubmitOutcome, Error> {
        let today = self.clock.local_date(now);
        let txn = self.db.begin().await?;

        let report = ConflictChecker::new(&txn)
            .check(today, &submission.candidates)
            .await?;

        if report.has_conflicts && !submission.confirmed {
            txn.rollback().await?;

            return Ok(SubmitOutcome::NeedsConfirmation(report));
        }

        let bread_type_ids: Vec<i32> = submission
            .candidates
            .iter()
            .map(|c| c.bread_type_id)
            .collect();
        let prices: HashMap<i32, f64> = BreadTypeRepository::new(&txn)
            .get_many(&bread_type_ids)
            .await?
            .into_iter()
            .map(|b| (b.id, b.unit_price))
            .collect();

        let repo = RemainingBreadRepository::new(&txn);
        let mut saved = Vec::with_capacity(submission.candidates.len());

        for candidate in &submission.candidates {
            let Some(unit_price) = prices.get(&candidate.bread_type_id) else {
                return Err(Error::NotFound(format!(
                    "Bread type {}",
                    candidate.bread_type_id
                )));
            };

            let record = repo
                .upsert(&RemainingCount {
                    bread_type_id: candidate.bread_type_id,
                    shift: candidate.shift,
                    quantity: candidate.quantity,
                    unit_price: *unit_price,
                    record_date: today,
                    recorded_by: candidate.recorded_by,
                })
                .await?;

            saved.push(record);
        }

        txn.commit().await?;

        activity.log(
            NewActivity::new(
                actor,
                ActivityType::RemainingRecorded,
                format!("Recorded remaining stock for {} bread type(s)", saved.len()),
            )
            .with_shift(submission.shift)
            .with_metadata(serde_json::json!({
                "record_date": today,
                "confirmed_conflicts": report.conflicts.len(),
            })),
        );

        Ok(SubmitOutcome::Saved(saved))
    }

    /// Remaining counts recorded for local `date`, today when `None`.
    pub async fn list(
        &self,
        date: Option<NaiveDate>,
        shift: Option<Shift>,
        now: DateTime<Utc>,
    ) -> Result<Vec<RemainingBreadModel>, Error> {
        let date = date.unwrap_or_else(|| self.clock.local_date(now));

        Ok(RemainingBreadRepository::new(self.db)
            .list_for_date(date, shift)
            .await?)
    }

    /// Produced minus sold per bread type within the latest window of `shift`.
    pub async fn available(
        &self,
        shift: Shift,
        now: DateTime<Utc>,
    ) -> Result<AvailableStockDto, Error> {
        let window = self.clock.latest_window(shift, now);
        let (start, end) = (window.start.naive_utc(), window.end.naive_utc());

        let batches = BatchRepository::new(self.db)
            .list_created_between(shift, start, end)
            .await?;
        let sales = SalesLogRepository::new(self.db)
            .list_recorded_between(shift, start, end, None)
            .await?;

        let levels = available_stock(&batches, &sales);

        let bread_type_ids: Vec<i32> = levels.iter().map(|l| l.bread_type_id).collect();
        let names: HashMap<i32, String> = BreadTypeRepository::new(self.db)
            .get_many(&bread_type_ids)
            .await?
            .into_iter()
            .map(|b| (b.id, b.name))
            .collect();

        let items = levels
            .into_iter()
            .map(|level| StockLevelDto {
                bread_type_id: level.bread_type_id,
                name: names
                    .get(&level.bread_type_id)
                    .cloned()
                    .unwrap_or_default(),
                produced: level.produced,
                sold: level.sold,
                available: level.available,
            })
            .collect();

        Ok(AvailableStockDto {
            shift,
            window_start: window.start,
            window_end: window.end,
            items,
        })
    }
}
