//! Bakeshift: production, sales and shift reconciliation server for bakeries.

pub mod model;
pub mod server;
