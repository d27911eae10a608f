pub use super::activity::Entity as Activity;
pub use super::batch::Entity as Batch;
pub use super::bread_type::Entity as BreadType;
pub use super::profile::Entity as Profile;
pub use super::remaining_bread::Entity as RemainingBread;
pub use super::sales_log::Entity as SalesLog;
pub use super::shift_feedback::Entity as ShiftFeedback;
pub use super::staff_session::Entity as StaffSession;
