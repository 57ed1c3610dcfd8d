/// MCP tools for the team directory
/// 
/// This module contains the operations external clients (like Claude) can
/// call. Each tool takes a typed params struct, already deserialized and
/// shape-checked by the dispatcher, and returns plain domain data.

pub mod get_user;
pub mod list_users;
pub mod create_user;
pub mod get_projects;

// Re-export tool functions for easy access
pub use get_user::*;
pub use list_users::*;
pub use create_user::*;
pub use get_projects::*;

use thiserror::Error;
use crate::storage::StorageError;

/// Outcome of a failed tool call
/// 
/// The first three variants are the typed failures a caller can act on.
/// The rest carry failures the tool did not classify itself.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0}")]
    InvalidInput(String),
    
    #[error("{0}")]
    Conflict(String),
    
    #[error("{0}")]
    NotFound(String),
    
    #[error(transparent)]
    Storage(#[from] StorageError),
    
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
