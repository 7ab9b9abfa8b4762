//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod user;

pub use user::{NewUser, UserRecord, UserRepository};
