//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! services can run them against the pool or inside a transaction.

pub mod activity;
pub mod batch;
pub mod bread_type;
pub mod profile;
pub mod remaining_bread;
pub mod sales_log;
pub mod shift_feedback;
pub mod staff_session;
