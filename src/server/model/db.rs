//! Database model type aliases.
//!
//! Short names for the SeaORM models from the `entity` crate, used across repositories,
//! services and serializers.

/// Type alias for a Reviewly user account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name
/// - `email` - Unique email address
/// - `hashed_password` - Argon2 PHC string
/// - `first_name`, `last_name` - Display name parts
/// - `created_at`, `updated_at` - Record timestamps
pub type UserModel = entity::user::Model;

/// Type alias for a reviewed business.
pub type BusinessModel = entity::business::Model;

/// Type alias for a review written by a user about a business.
pub type ReviewModel = entity::review::Model;
