//! Server application core modules.
//!
//! This module contains all server-side functionality for bakeshift: HTTP routing and
//! controllers, the service layer holding the shift, batch and inventory rules, database
//! repositories, session handling and the maintenance scheduler.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
