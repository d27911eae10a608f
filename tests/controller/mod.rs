//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with `State` and the test session, verifying status codes,
//! response bodies and the role checks of each endpoint.

mod auth;
mod batch;
mod dashboard;
mod feedback;
mod inventory;
mod shift;

use bakeshift_test_utils::prelude::*;

use crate::{util::read_json, TestContextExt};
