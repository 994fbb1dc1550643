//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Each submodule defines a specific piece of session state (the logged in
//! user ID, the CSRF token) with methods for inserting and retrieving it from the session
//! store.

pub mod auth;
pub mod user;
