//! Declarative test builder.
//!
//! The builder queues the user table set and mock users, creating them in dependency order
//! during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_user_tables: bool,

    // Usernames of users to insert, in order, so ids are 1..=n
    users: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    ///
    /// Without `with_user_tables` the context only holds a database connection and session,
    /// which is enough for CSRF and session tests.
    pub fn new() -> Self {
        Self {
            include_user_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the user, business, and review tables to the test database.
    ///
    /// Tables are created in foreign key order: users, businesses, reviews.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Insert a mock user with the given username during `build()`.
    ///
    /// Users are inserted in call order, so the first mock user gets id 1.
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            context
                .with_tables(vec![
                    schema.create_table_from_entity(entity::prelude::User),
                    schema.create_table_from_entity(entity::prelude::Business),
                    schema.create_table_from_entity(entity::prelude::Review),
                ])
                .await?;
        }

        for username in self.users {
            context.user().insert_mock_user(&username).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
