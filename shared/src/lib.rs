//! Auth Service Shared Library
//!
//! This crate contains the wire-level request and response types shared
//! between the backend and its integration tests.

pub mod types;

// Re-export commonly used items
pub use types::*;
