//! Test fixture modules for database record creation.
//!
//! - `user` - user accounts
//! - `review` - businesses and the reviews written about them

pub mod review;
pub mod user;
