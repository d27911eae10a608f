//! Production batches.
//!
//! Batch numbers are unique within `(bread_type_id, shift)`. The number shown before
//! creation is only advisory: [`BatchService::create`] reads the latest number, increments
//! it and inserts inside one transaction, retrying from scratch when the unique index
//! reports that a concurrent creation took the number first.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ActivityType, BatchStatus, Role, Shift};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::batch::{CreateBatchDto, UpdateBatchDto, VerifyDeletionDto},
    server::{
        data::{
            batch::{BatchChanges, BatchRepository, NewBatch},
            bread_type::BreadTypeRepository,
        },
        error::{validation::ValidationError, Error},
        model::db::{BatchModel, ProfileModel},
        service::{
            activity::{ActivityLogger, NewActivity},
            retry::RetryContext,
            stats::BatchStats,
        },
        util::{
            batch_number::next_batch_number,
            shift::ShiftClock,
            validate::{non_negative, parse_status, require, require_shift},
        },
    },
};

/// Validate the body of a batch creation request.
///
/// `target_quantity` defaults to `actual_quantity`, `status` to active and `start_time` to
/// `now`; an unreadable `start_time` also falls back to `now`.
pub fn validate_new_batch(
    dto: CreateBatchDto,
    created_by: i32,
    clock: &ShiftClock,
    now: DateTime<Utc>,
) -> Result<NewBatch, ValidationError> {
    let shift = require_shift(dto.shift.as_deref())?;
    let bread_type_id = require(dto.bread_type_id, "bread_type_id")?;
    let actual_quantity = non_negative(
        require(dto.actual_quantity, "actual_quantity")?,
        "actual_quantity",
    )?;
    let target_quantity = non_negative(
        dto.target_quantity.unwrap_or(actual_quantity),
        "target_quantity",
    )?;
    let status = parse_status(dto.status.as_deref())?.unwrap_or(BatchStatus::Active);
    let start_time = clock.parse_instant(dto.start_time.as_deref(), now);

    Ok(NewBatch {
        bread_type_id,
        shift,
        status,
        target_quantity,
        actual_quantity,
        notes: dto
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty()),
        start_time: start_time.naive_utc(),
        created_by,
    })
}

/// Validate the body of a batch update request.
pub fn validate_batch_changes(dto: UpdateBatchDto) -> Result<BatchChanges, ValidationError> {
    let actual_quantity = dto
        .actual_quantity
        .map(|quantity| non_negative(quantity, "actual_quantity"))
        .transpose()?;
    let target_quantity = dto
        .target_quantity
        .map(|quantity| non_negative(quantity, "target_quantity"))
        .transpose()?;

    Ok(BatchChanges {
        actual_quantity,
        target_quantity,
        status: parse_status(dto.status.as_deref())?,
        notes: dto.notes.map(|notes| notes.trim().to_string()),
    })
}

pub struct BatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a batch with the next free number in its scope.
    ///
    /// # Returns
    /// - `Ok(BatchModel)` - Created batch
    /// - `Err(Error::NotFound)` - Bread type does not exist
    /// - `Err(Error::DbErr)` - Database failure, or the number stayed contended after all retries
    pub async fn create(
        &self,
        actor: &ProfileModel,
        new_batch: NewBatch,
        activity: &ActivityLogger,
    ) -> Result<BatchModel, Error> {
        let db = self.db;
        let new_batch = &new_batch;

        let batch = RetryContext::new()
            .execute_with_retry(
                &format!(
                    "create batch for bread type ID {} ({:?} shift)",
                    new_batch.bread_type_id, new_batch.shift
                ),
                || async move {
                    let txn = db.begin().await?;

                    if BreadTypeRepository::new(&txn)
                        .get(new_batch.bread_type_id)
                        .await?
                        .is_none()
                    {
                        return Err(Error::NotFound(format!(
                            "Bread type {}",
                            new_batch.bread_type_id
                        )));
                    }

                    let repo = BatchRepository::new(&txn);
                    let latest = repo
                        .latest_in_scope(new_batch.bread_type_id, new_batch.shift)
                        .await?;
                    let batch_number =
                        next_batch_number(latest.as_ref().map(|b| b.batch_number.as_str()));

                    let batch = repo.create(new_batch, batch_number).await?;

                    txn.commit().await?;

                    Ok(batch)
                },
            )
            .await?;

        activity.log(
            NewActivity::new(
                actor,
                ActivityType::BatchCreated,
                format!("Created batch {}", batch.batch_number),
            )
            .with_shift(batch.shift)
            .with_metadata(serde_json::json!({
                "batch_id": batch.id,
                "batch_number": batch.batch_number,
                "bread_type_id": batch.bread_type_id,
                "actual_quantity": batch.actual_quantity,
            })),
        );

        Ok(batch)
    }

    /// Number the next batch of the scope would get if created now.
    pub async fn next_number(&self, bread_type_id: i32, shift: Shift) -> Result<String, Error> {
        let latest = BatchRepository::new(self.db)
            .latest_in_scope(bread_type_id, shift)
            .await?;

        Ok(next_batch_number(
            latest.as_ref().map(|b| b.batch_number.as_str()),
        ))
    }

    pub async fn list(
        &self,
        user_id: i32,
        status: Option<BatchStatus>,
        shift: Option<Shift>,
    ) -> Result<Vec<BatchModel>, Error> {
        Ok(BatchRepository::new(self.db)
            .list_owned(user_id, status, shift)
            .await?)
    }

    /// Apply `changes` to one of the actor's batches.
    pub async fn update(
        &self,
        actor: &ProfileModel,
        batch_id: i32,
        changes: BatchChanges,
        activity: &ActivityLogger,
    ) -> Result<BatchModel, Error> {
        let repo = BatchRepository::new(self.db);

        let Some(batch) = repo.get_owned(batch_id, actor.id).await? else {
            return Err(Error::NotFound(format!("Batch {}", batch_id)));
        };

        let batch = repo.update(batch, changes).await?;

        activity.log(
            NewActivity::new(
                actor,
                ActivityType::BatchUpdated,
                format!("Updated batch {}", batch.batch_number),
            )
            .with_shift(batch.shift)
            .with_metadata(serde_json::json!({
                "batch_id": batch.id,
                "status": batch.status,
                "actual_quantity": batch.actual_quantity,
            })),
        );

        Ok(batch)
    }

    /// Delete one of the actor's batches.
    pub async fn delete(
        &self,
        actor: &ProfileModel,
        batch_id: i32,
        activity: &ActivityLogger,
    ) -> Result<(), Error> {
        let repo = BatchRepository::new(self.db);

        let Some(batch) = repo.get_owned(batch_id, actor.id).await? else {
            return Err(Error::NotFound(format!("Batch {}", batch_id)));
        };

        repo.delete(batch.id).await?;

        activity.log(
            NewActivity::new(
                actor,
                ActivityType::BatchDeleted,
                format!("Deleted batch {}", batch.batch_number),
            )
            .with_shift(batch.shift)
            .with_metadata(serde_json::json!({ "batch_id": batch.id })),
        );

        Ok(())
    }

    /// Stats over the batches visible to `viewer`.
    ///
    /// Owners and managers see every batch, sales reps only their own.
    pub async fn stats(
        &self,
        viewer: &ProfileModel,
        shift: Option<Shift>,
        clock: &ShiftClock,
        now: DateTime<Utc>,
    ) -> Result<BatchStats, Error> {
        let created_by = match viewer.role {
            Role::Owner | Role::Manager => None,
            Role::SalesRep => Some(viewer.id),
        };

        let batches = BatchRepository::new(self.db).list(created_by, shift).await?;

        Ok(BatchStats::from_batches(&batches, &clock.local_day(now)))
    }

    /// Whether `user_id` has no batches left in `shift`.
    pub async fn verify_deletion(
        &self,
        user_id: i32,
        shift: Shift,
    ) -> Result<VerifyDeletionDto, Error> {
        let remaining = BatchRepository::new(self.db)
            .count_owned_in_shift(user_id, shift)
            .await?;

        Ok(VerifyDeletionDto {
            verified: remaining == 0,
            remaining,
        })
    }
}
