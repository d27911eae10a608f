//! Fixture helpers for inserting records while a test runs, plus pure model factories
//! for tests which never touch the database.

pub mod bakery;
pub mod factory;
pub mod user;
