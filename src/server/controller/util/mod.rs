//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: user session retrieval
//! for protected endpoints, role checks, shift resolution against the session and
//! extractors reporting rejected input as validation errors.

pub mod access;
pub mod extract;
pub mod get_user;
