//! Test context returned by [`TestBuilder::build`](crate::TestBuilder::build).

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Unique indexes the server relies on which `Schema::create_table_from_entity` cannot
/// express, since they span several columns.
pub(crate) static BAKERY_UNIQUE_INDEXES: [&str; 2] = [
    "CREATE UNIQUE INDEX IF NOT EXISTS \"idx-batch-bread_type_id-shift-batch_number\" \
     ON \"batch\" (\"bread_type_id\", \"shift\", \"batch_number\")",
    "CREATE UNIQUE INDEX IF NOT EXISTS \"idx-remaining_bread-bread_type_id-shift-record_date\" \
     ON \"remaining_bread\" (\"bread_type_id\", \"shift\", \"record_date\")",
];

/// Test environment holding an in-memory database and session.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_bakery_tables().build().await?;
///
/// let owner = test.user().insert_user("Ada", Role::Owner).await?;
/// let bread = test.bakery().insert_bread_type("Agege", 500.0).await?;
///
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type constructible from it.
    ///
    /// Lets integration tests build the server's `AppState` without this crate
    /// depending on the server crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new, empty test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables created
    /// - `Err(TestError::DbErr)` - Failed to open the in-memory database
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Execute CREATE TABLE statements for the provided schemas.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Execute raw SQL statements, used for the composite unique indexes.
    pub(crate) async fn with_raw_statements(&self, stmts: &[&str]) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute_unprepared(stmt).await?;
        }

        Ok(())
    }
}
