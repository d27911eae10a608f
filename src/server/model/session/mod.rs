//! Session data models and utilities.
//!
//! Type-safe wrappers for values kept in the tower-sessions store (Redis-backed in
//! production). Each submodule owns one session key.

pub mod shift;
pub mod staff;
pub mod user;
