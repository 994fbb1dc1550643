//! Constant values shared by fixtures and tests.
//!
//! None of these are real secrets, they only need to be stable across a test run.

/// CSRF token placed in both the test session and the `csrf_token` cookie.
pub static TEST_CSRF_TOKEN: &str = "test_csrf_token_0123456789abcdef";

/// Placeholder stored in `users.hashed_password` for fixtures that never log in.
///
/// Not a parseable PHC string, so any attempt to verify a password against it fails.
pub static TEST_PASSWORD_HASH: &str = "not-a-real-password-hash";
