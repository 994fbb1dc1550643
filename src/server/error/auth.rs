use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorsDto, MessageDto};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login failed for unknown credential or incorrect password")]
    InvalidCredentials,
}

impl AuthError {
    fn unauthorized() -> Response {
        (StatusCode::UNAUTHORIZED, Json(MessageDto::new("Unauthorized"))).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthorized()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::unauthorized()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                // Same message for unknown user and wrong password
                let mut errors = FieldErrorsDto::default();
                errors
                    .0
                    .insert("credential".to_string(), vec!["Invalid credentials.".to_string()]);

                (StatusCode::UNAUTHORIZED, Json(errors)).into_response()
            }
        }
    }
}
