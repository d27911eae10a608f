//! Server application models and type definitions.
//!
//! Application state shared by the handlers, database model type aliases and the typed
//! session wrappers.

pub mod app;
pub mod db;
pub mod session;
