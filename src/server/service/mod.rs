//! Service layer for business logic.
//!
//! Services validate what controllers hand them, coordinate repositories (inside
//! transactions where several writes must land together) and record activity. They take
//! the database connection by reference and are cheap to construct per request.

pub mod activity;
pub mod auth;
pub mod batch;
pub mod bread_type;
pub mod dashboard;
pub mod feedback;
pub mod inventory;
pub mod retry;
pub mod sales;
pub mod shift;
pub mod stats;
pub mod user;
