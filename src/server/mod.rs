//! Server application core modules.
//!
//! This module contains all server-side functionality for the Reviewly API: HTTP routing,
//! session authentication with CSRF protection, user accounts, and read access to each
//! user's reviews.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
