use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::Shift;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CurrentShiftDto {
    /// Shift selected for this session, used when requests omit a shift
    pub selected: Shift,
    /// Shift the bakery clock is in right now
    pub clock_shift: Shift,
    /// Local date the current clock shift started on
    pub shift_date: NaiveDate,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct SelectShiftDto {
    pub shift: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct EndShiftDto {
    /// Defaults to the session's shift
    pub shift: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EndShiftResultDto {
    pub shift: Shift,
    pub batches_deleted: u64,
    pub sales_deleted: u64,
}
