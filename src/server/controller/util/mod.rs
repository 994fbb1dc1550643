//! Utility functions for controller request handling.
//!
//! CSRF token issuance and validation for form submissions, the `CurrentUser` extractor
//! guarding routes that require a logged in user, and `UserIdPath` for user ID path segments.

pub mod csrf;
pub mod current_user;
pub mod user_id;
