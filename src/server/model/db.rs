//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Staff account with login credentials and role.
pub type ProfileModel = entity::profile::Model;

/// Product baked and sold, carrying its current unit price.
pub type BreadTypeModel = entity::bread_type::Model;

/// Production batch of one bread type within a shift.
///
/// `batch_number` is unique within `(bread_type_id, shift)`.
pub type BatchModel = entity::batch::Model;

/// Single recorded sale. Immutable once written.
pub type SalesLogModel = entity::sales_log::Model;

/// End of shift remaining stock count, one per `(bread_type_id, shift, record_date)`.
pub type RemainingBreadModel = entity::remaining_bread::Model;

pub type ShiftFeedbackModel = entity::shift_feedback::Model;

/// Audit feed entry. Pruned once older than the activity retention window.
pub type ActivityModel = entity::activity::Model;

pub type StaffSessionModel = entity::staff_session::Model;
