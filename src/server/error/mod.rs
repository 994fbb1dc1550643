//! Error types for the Reviewly server application.
//!
//! Domain errors (authentication, users, form validation, configuration) each map themselves
//! to an HTTP response. Library errors are aggregated through `#[from]` so handlers can use
//! `?` freely, and anything without a specific mapping becomes a logged 500.

pub mod auth;
pub mod config;
pub mod form;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{auth::AuthError, config::ConfigError, form::FormError, user::UserError},
};

/// Main error type for the Reviewly server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (no session, stale session, bad credentials)
/// - User errors (user not found, access to another user's data)
/// - Form errors (field-level validation failures, including CSRF)
/// - External library errors (database, sessions, password hashing, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// User lookup or ownership error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Submitted form failed validation.
    #[error(transparent)]
    FormError(#[from] FormError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Reviewly's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// I/O error (binding the server socket).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Form validation failures
/// - 401 Unauthorized - Missing or stale session, invalid login credentials
/// - 403 Forbidden - Access to another user's data
/// - 404 Not Found - Missing users
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::FormError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}
