//! HTTP controller endpoints for the bakeshift web API.
//!
//! Axum handlers resolve the caller from the session, validate input, call into the
//! service layer and map results to responses. Every handler is annotated for utoipa so
//! the router can assemble the OpenAPI document.

pub mod activity;
pub mod auth;
pub mod batch;
pub mod bread_type;
pub mod dashboard;
pub mod feedback;
pub mod inventory;
pub mod sales;
pub mod shift;
pub mod user;
pub mod util;
