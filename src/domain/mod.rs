/// Domain module containing the directory's core entities and validation
/// 
/// This module defines the two entities the server manages (User, Project)
/// along with their identifier and enum types. These types are what the
/// storage layer holds and what the tools serialize back to the caller.

pub mod user;
pub mod project;
pub mod types;

// Re-export public types for easy access
pub use user::*;
pub use project::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}
