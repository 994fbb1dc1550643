//! User fixture utilities.
//!
//! Provides methods for inserting user records into the test database, and factory
//! functions for creating in-memory model instances.

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, model::UserModel, TestContext};

impl TestContext {
    /// Access user fixture helpers.
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the provided password hash.
    ///
    /// Email is derived from the username as `{username}@example.com`, first and last name
    /// are fixed test values.
    pub async fn insert_user(
        &self,
        username: &str,
        hashed_password: &str,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", username)),
                hashed_password: ActiveValue::Set(hashed_password.to_string()),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set(username.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a user that cannot log in with any password.
    pub async fn insert_mock_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user(username, TEST_PASSWORD_HASH).await
    }
}
