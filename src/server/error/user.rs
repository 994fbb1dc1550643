use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("User ID path segment {0:?} is not a valid ID")]
    InvalidUserId(String),
    #[error("User ID {requester_id} attempted to access data owned by user ID {user_id}")]
    Forbidden { user_id: i32, requester_id: i32 },
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotFound(_) | Self::InvalidUserId(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageDto::new("User couldn't be found")),
            )
                .into_response(),
            Self::Forbidden { .. } => {
                tracing::debug!("{}", self);

                (StatusCode::FORBIDDEN, Json(MessageDto::new("Forbidden"))).into_response()
            }
        }
    }
}
