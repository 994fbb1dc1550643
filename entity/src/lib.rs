//! SeaORM entity definitions for the Reviewly database.

pub mod prelude;

pub mod business;
pub mod review;
pub mod user;
