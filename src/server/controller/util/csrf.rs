use axum::http::{header::COOKIE, HeaderMap};
use rand::{distr::Alphanumeric, Rng};
use subtle::ConstantTimeEq;
use tower_sessions::{
    cookie::{Cookie, SameSite},
    Session,
};

use crate::server::{error::form::FormError, error::Error, model::session::auth::SessionAuthCsrf};

pub const CSRF_COOKIE_NAME: &str = "csrf_token";
pub const CSRF_FIELD: &str = "csrf_token";
pub const CSRF_TOKEN_MISSING: &str = "The CSRF token is missing.";
pub const CSRF_TOKEN_MISMATCH: &str = "The CSRF tokens do not match.";

const CSRF_TOKEN_LENGTH: usize = 40;

/// Generates a random alphanumeric CSRF token.
pub fn generate_csrf_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Builds the `csrf_token` cookie.
///
/// Not HttpOnly, the client reads it to echo the token back.
pub fn csrf_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((CSRF_COOKIE_NAME, token.to_string()))
        .path("/")
        .same_site(SameSite::Strict)
        .secure(!cfg!(debug_assertions))
        .build()
}

/// Reads the `csrf_token` cookie from the request headers.
pub fn csrf_token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == CSRF_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

/// Validates the submitted CSRF token against the one stored in session.
///
/// Tokens are compared in constant time.
///
/// Failures are added to `errors` under `csrf_token` rather than returned, so they are
/// reported together with the rest of the form.
///
/// # Returns
/// - `Ok(())` - Check ran, any failure was added to `errors`
/// - `Err(Error)` - Session retrieval failed
pub async fn validate_csrf(
    session: &Session,
    submitted: Option<&str>,
    errors: &mut FormError,
) -> Result<(), Error> {
    let stored = SessionAuthCsrf::get(session).await?;

    match (submitted, stored) {
        (Some(submitted), Some(stored)) if !submitted.is_empty() => {
            if !bool::from(submitted.as_bytes().ct_eq(stored.as_bytes())) {
                errors.add(CSRF_FIELD, CSRF_TOKEN_MISMATCH);
            }
        }
        _ => errors.add(CSRF_FIELD, CSRF_TOKEN_MISSING),
    }

    Ok(())
}
