//! CSRF token session data.
//!
//! The token issued by `GET /api/auth/csrf/restore` is stored here and compared against the
//! `csrf_token` cookie on every state-changing form submission.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for storing the CSRF token.
pub const SESSION_AUTH_CSRF_KEY: &str = "reviewly:auth:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Inserts the CSRF token into the session, replacing any previous token.
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(Error)` - Session storage failed
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(token.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the CSRF token from the session without removing it.
    ///
    /// The token stays valid for the life of the session, so it is not consumed on use.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Token present
    /// - `Ok(None)` - No token has been issued for this session
    /// - `Err(Error)` - Session retrieval failed
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
            .map(|SessionAuthCsrf(token)| token))
    }
}
