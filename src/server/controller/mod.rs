//! HTTP controller endpoints for the Reviewly web API.
//!
//! This module contains Axum handlers for user accounts and authentication. Controllers pull
//! the session, path and form inputs out of the request, call the services, and map the
//! results to JSON responses. Every handler is annotated for the utoipa OpenAPI document.

pub mod auth;
pub mod user;
pub mod util;
