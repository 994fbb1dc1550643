//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table (plus the joins needed to read related
//! records) and return entity models or `DbErr`. They are generic over `ConnectionTrait` so
//! they work on a pooled connection or inside a transaction.

pub mod review;
pub mod user;
