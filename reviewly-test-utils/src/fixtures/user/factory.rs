//! Factory functions for generating mock user database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for serializer unit tests.

use chrono::Utc;

use crate::{constant::TEST_PASSWORD_HASH, model::UserModel};

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `id` - Primary key to assign
/// - `username` - Username, also used to derive the email address and last name
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    let now = Utc::now().naive_utc();
    UserModel {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        hashed_password: TEST_PASSWORD_HASH.to_string(),
        first_name: "Test".to_string(),
        last_name: username.to_string(),
        created_at: now,
        updated_at: now,
    }
}
