/// Storage layer holding the directory's entity collections
/// 
/// This module owns users and projects for the lifetime of the process.
/// It exposes a small trait so tools and resources stay independent of
/// how the collections are kept.

pub mod memory;
pub mod seed;

// Re-export the main storage types
pub use memory::*;
pub use seed::*;

use thiserror::Error;
use crate::domain::{DomainError, Project, ProjectId, ProjectStatus, User, UserId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("User with email {email} already exists")]
    DuplicateEmail { email: String },
    
    #[error("User with ID {user_id} already exists")]
    DuplicateUserId { user_id: UserId },
    
    #[error("No user ID is left after {last}")]
    UserIdsExhausted { last: UserId },
    
    #[error("Project with ID {project_id} already exists")]
    DuplicateProjectId { project_id: ProjectId },
    
    #[error("Project {project_id} is assigned to unknown user {user_id}")]
    DanglingReference { project_id: ProjectId, user_id: UserId },
    
    #[error("Invalid seed data: {0}")]
    InvalidSeed(#[from] DomainError),
    
    #[error("Failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),
    
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// How project-to-user references are checked when the store is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Dangling `assignedTo` values are tolerated
    #[default]
    Loose,
    /// Every `assignedTo` must name an existing user
    Strict,
}

/// Trait defining the storage interface for the directory
/// 
/// Reads hand back owned snapshots in insertion order. The only mutation
/// is appending a user, which takes `&mut self` so a check-then-insert
/// sequence by the caller cannot interleave with another request.
pub trait DirectoryStorage {
    /// Get a user by ID
    fn find_user_by_id(&self, user_id: UserId) -> Option<User>;
    
    /// List every user in creation order
    fn list_users(&self) -> Vec<User>;
    
    /// Whether any user already has this exact email
    fn email_exists(&self, email: &str) -> bool;
    
    /// Id for the next user: one past the current maximum, or 1 if empty
    fn next_user_id(&self) -> Result<UserId, StorageError>;
    
    /// Append a user that the caller has already validated
    fn insert_user(&mut self, user: User) -> Result<(), StorageError>;
    
    /// List projects, optionally restricted to one status
    fn list_projects(&self, status: Option<ProjectStatus>) -> Vec<Project>;
    
    /// Number of stored users
    fn user_count(&self) -> usize;
    
    /// Number of stored projects
    fn project_count(&self) -> usize;
}
