//! Database model type aliases for test utilities, matching those used by the server crate.

pub type ProfileModel = entity::profile::Model;
pub type BreadTypeModel = entity::bread_type::Model;
pub type BatchModel = entity::batch::Model;
pub type SalesLogModel = entity::sales_log::Model;
pub type RemainingBreadModel = entity::remaining_bread::Model;
pub type ShiftFeedbackModel = entity::shift_feedback::Model;
pub type ActivityModel = entity::activity::Model;
pub type StaffSessionModel = entity::staff_session::Model;
