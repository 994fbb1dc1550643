//! Database model type aliases matching those in the main reviewly crate.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for business database model.
pub type BusinessModel = entity::business::Model;

/// Type alias for review database model.
pub type ReviewModel = entity::review::Model;
