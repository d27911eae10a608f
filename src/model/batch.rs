use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{BatchStatus, Shift};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BatchDto {
    pub id: i32,
    pub bread_type_id: i32,
    pub batch_number: String,
    pub shift: Shift,
    pub status: BatchStatus,
    pub target_quantity: i32,
    pub actual_quantity: i32,
    pub notes: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub created_by: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::batch::Model> for BatchDto {
    fn from(batch: entity::batch::Model) -> Self {
        Self {
            id: batch.id,
            bread_type_id: batch.bread_type_id,
            batch_number: batch.batch_number,
            shift: batch.shift,
            status: batch.status,
            target_quantity: batch.target_quantity,
            actual_quantity: batch.actual_quantity,
            notes: batch.notes,
            start_time: batch.start_time,
            end_time: batch.end_time,
            created_by: batch.created_by,
            created_at: batch.created_at,
            updated_at: batch.updated_at,
        }
    }
}

/// Body of `POST /api/batches`
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateBatchDto {
    pub bread_type_id: Option<i32>,
    pub actual_quantity: Option<i32>,
    /// `morning` or `night`
    pub shift: Option<String>,
    pub notes: Option<String>,
    /// RFC 3339 or local `YYYY-MM-DDTHH:MM[:SS]`, defaults to now
    pub start_time: Option<String>,
    /// `active`, `completed` or `cancelled`, defaults to `active`
    pub status: Option<String>,
    /// Defaults to `actual_quantity`
    pub target_quantity: Option<i32>,
}

/// Body of `PUT /api/batches/{batch_id}`, absent fields are left unchanged
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateBatchDto {
    pub actual_quantity: Option<i32>,
    pub target_quantity: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct BatchQuery {
    pub status: Option<String>,
    pub shift: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BatchNumberDto {
    pub batch_number: String,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct VerifyDeletionQuery {
    pub shift: Option<String>,
    /// Defaults to the caller, checking another user requires owner or manager
    pub user_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VerifyDeletionDto {
    /// True when no batches remain for the user and shift
    pub verified: bool,
    pub remaining: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShiftBreakdownDto {
    pub morning: u64,
    pub night: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BatchStatsDto {
    pub total_batches: u64,
    pub active_batches: u64,
    pub completed_batches: u64,
    pub cancelled_batches: u64,
    pub total_target_quantity: i64,
    pub total_actual_quantity: i64,
    pub batches_created_today: u64,
    /// Percentage of batches completed, 2 decimal places
    pub completion_rate: f64,
    /// Actual over target quantity as a percentage, 2 decimal places
    pub efficiency_rate: f64,
    pub by_shift: ShiftBreakdownDto,
}
