use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::{user::UserError, Error};

/// User ID taken from the `{user_id}` path segment.
///
/// Anything that doesn't parse as a database ID can't name an existing user, so it is
/// rejected with the same 404 as a missing user instead of axum's plain-text 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserIdPath(pub i32);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| UserError::InvalidUserId(rejection.body_text()))?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| UserError::InvalidUserId(raw).into())
    }
}
