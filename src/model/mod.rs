//! Request and response bodies of the HTTP API.
//!
//! Request bodies accept loosely typed input (optional fields, enum values as strings) so
//! that missing fields and unknown enum values get a field-specific validation message.
//! Input that fails to deserialize at all is caught by the controller extractors.

pub mod activity;
pub mod api;
pub mod batch;
pub mod bread_type;
pub mod dashboard;
pub mod feedback;
pub mod inventory;
pub mod sales;
pub mod shift;
pub mod user;
