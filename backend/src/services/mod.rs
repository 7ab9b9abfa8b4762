//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod auth;
pub mod directory;

pub use auth::{AuthService, RegisterInput};
pub use directory::{build_http_client, DirectoryService};
