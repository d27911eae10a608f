use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::Shift;
use serde::{Deserialize, Serialize};

/// A single remaining stock count as submitted by staff
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RemainingItemDto {
    pub bread_type_id: i32,
    pub quantity: i32,
}

/// Body of `POST /api/remaining-bread` and `POST /api/remaining-bread/check`
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct RemainingBreadRequestDto {
    /// Defaults to the session's shift
    pub shift: Option<String>,
    #[serde(default)]
    pub items: Vec<RemainingItemDto>,
    /// Write even when the submission looks like a re-submission of an earlier day
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictDto {
    /// Bread type the conflicting record belongs to
    pub identifier: i32,
    pub quantity: i32,
    /// Local date of the earlier record with the same quantity
    pub existing_date: NaiveDate,
    pub original_input: RemainingItemDto,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReportDto {
    pub has_conflicts: bool,
    pub conflicts: Vec<ConflictDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RemainingBreadDto {
    pub id: i32,
    pub bread_type_id: i32,
    pub shift: Shift,
    pub quantity: i32,
    pub unit_price: f64,
    pub record_date: NaiveDate,
    pub recorded_by: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::remaining_bread::Model> for RemainingBreadDto {
    fn from(record: entity::remaining_bread::Model) -> Self {
        Self {
            id: record.id,
            bread_type_id: record.bread_type_id,
            shift: record.shift,
            quantity: record.quantity,
            unit_price: record.unit_price,
            record_date: record.record_date,
            recorded_by: record.recorded_by,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StockLevelDto {
    pub bread_type_id: i32,
    pub name: String,
    pub produced: i64,
    pub sold: i64,
    pub available: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AvailableStockDto {
    pub shift: Shift,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub items: Vec<StockLevelDto>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct RemainingBreadQuery {
    /// `morning` or `night`, all shifts when absent
    pub shift: Option<String>,
    /// Local record date, `YYYY-MM-DD`, defaults to today
    pub date: Option<String>,
}
