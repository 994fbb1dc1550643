//! Service layer for business logic.
//!
//! Services coordinate repositories, apply the rules that sit above a single query
//! (availability checks, password verification, ownership) and build the API DTOs.

pub mod auth;
pub mod review;
pub mod user;
