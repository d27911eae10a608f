//! Factory functions for in-memory models.
//!
//! These build model instances with standard test values without touching the database,
//! for unit tests of pure functions such as the stats aggregator.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{BatchStatus, Role, Shift};

use crate::model::{BatchModel, ProfileModel, SalesLogModel};

/// Create an active profile model which is never persisted.
pub fn mock_profile_model(id: i32, role: Role) -> ProfileModel {
    ProfileModel {
        id,
        name: format!("User {}", id),
        email: format!("user{}@bakeshift.test", id),
        password_hash: String::new(),
        role,
        is_active: true,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a batch model with the given status and quantities, created now.
pub fn mock_batch_model(status: BatchStatus, target: i32, actual: i32) -> BatchModel {
    mock_batch_model_at(status, target, actual, Shift::Morning, Utc::now().naive_utc())
}

/// Create a batch model with explicit shift and creation time.
pub fn mock_batch_model_at(
    status: BatchStatus,
    target: i32,
    actual: i32,
    shift: Shift,
    created_at: NaiveDateTime,
) -> BatchModel {
    BatchModel {
        id: 1,
        bread_type_id: 1,
        batch_number: "001".to_string(),
        shift,
        status,
        target_quantity: target,
        actual_quantity: actual,
        notes: None,
        start_time: created_at,
        end_time: None,
        created_by: 1,
        created_at,
        updated_at: created_at,
    }
}

/// Create a sales log model for the given bread type.
pub fn mock_sales_log_model(
    bread_type_id: i32,
    quantity: i32,
    unit_price: f64,
    discount: f64,
) -> SalesLogModel {
    SalesLogModel {
        id: 1,
        bread_type_id,
        quantity,
        unit_price,
        discount,
        shift: Shift::Morning,
        recorded_by: 1,
        created_at: Utc::now().naive_utc(),
    }
}
