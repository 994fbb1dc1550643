//! Request and response shapes of the HTTP API.
//!
//! These are the fixed JSON schemas returned to clients; database models never
//! leave the server without passing through one of these types.

pub mod api;
pub mod auth;
pub mod review;
pub mod user;
