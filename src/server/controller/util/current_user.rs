use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
};

/// The logged in user, extracted from the session.
///
/// Handlers taking this argument reject unauthenticated requests with 401 before their
/// body runs.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user: UserModel,
}

impl CurrentUser {
    pub fn id(&self) -> i32 {
        self.user.id
    }

    /// Retrieves the user ID from session and then the user from the database
    ///
    /// # Returns
    /// - `Ok(CurrentUser)`: User found
    /// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found
    ///   in database (session is cleared)
    /// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
    pub async fn from_session(db: &DatabaseConnection, session: &Session) -> Result<Self, Error> {
        let Some(user_id) = SessionUserId::get(session).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(db).get_by_id(user_id).await? else {
            session.clear().await;

            tracing::warn!(
                "Failed to find user ID {} in database despite having an active session; \
                cleared session for user, they will need to log in again",
                user_id
            );

            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(Self { user })
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| Error::InternalError(message.to_string()))?;

        Self::from_session(&state.db, &session).await
    }
}
