pub mod prelude;

pub mod activity;
pub mod batch;
pub mod bread_type;
pub mod profile;
pub mod remaining_bread;
pub mod sales_log;
pub mod sea_orm_active_enums;
pub mod shift_feedback;
pub mod staff_session;
