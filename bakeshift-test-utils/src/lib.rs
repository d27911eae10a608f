//! Test harness for the bakeshift workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a
//! test needs, and `build()` turns that into a [`TestContext`] holding an in-memory SQLite
//! database and an in-memory session. Fixture helpers on the context insert further records
//! while the test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_PASSWORD, fixtures::factory, TestBuilder, TestContext, TestError,
    };
}
