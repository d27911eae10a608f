//! Declarative test builder.
//!
//! Configuration methods queue tables and fixtures; everything is executed in order by
//! [`TestBuilder::build`].

use entity::sea_orm_active_enums::Role;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    context::{TestContext, BAKERY_UNIQUE_INDEXES},
    error::TestError,
};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_bakery_tables: bool,

    users: Vec<(String, Role)>,
    bread_types: Vec<(String, f64)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_bakery_tables: false,
            users: Vec::new(),
            bread_types: Vec::new(),
        }
    }

    /// Create every table the server uses, including the composite unique indexes on
    /// batch numbers and remaining stock.
    pub fn with_bakery_tables(mut self) -> Self {
        self.include_bakery_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use bakeshift_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), bakeshift_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Profile)
    ///     .with_table(Activity)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user profile with the given name and role.
    ///
    /// Users are inserted in the order they are declared, so the first declared user has
    /// ID 1, the second ID 2, and so on.
    pub fn with_user(mut self, name: &str, role: Role) -> Self {
        self.users.push((name.to_string(), role));
        self
    }

    /// Insert a bread type; IDs follow declaration order like [`Self::with_user`].
    pub fn with_bread_type(mut self, name: &str, unit_price: f64) -> Self {
        self.bread_types.push((name.to_string(), unit_price));
        self
    }

    /// Build the test context, creating tables and inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_bakery_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Profile),
                schema.create_table_from_entity(entity::prelude::BreadType),
                schema.create_table_from_entity(entity::prelude::Batch),
                schema.create_table_from_entity(entity::prelude::SalesLog),
                schema.create_table_from_entity(entity::prelude::RemainingBread),
                schema.create_table_from_entity(entity::prelude::ShiftFeedback),
                schema.create_table_from_entity(entity::prelude::Activity),
                schema.create_table_from_entity(entity::prelude::StaffSession),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_bakery_tables {
            setup.with_raw_statements(&BAKERY_UNIQUE_INDEXES).await?;
        }

        for (name, role) in self.users {
            setup.user().insert_user(&name, role).await?;
        }

        for (name, unit_price) in self.bread_types {
            setup.bakery().insert_bread_type(&name, unit_price).await?;
        }

        Ok(setup)
    }
}
