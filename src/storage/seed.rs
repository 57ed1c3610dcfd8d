/// Seed data loaded into the store at startup
/// 
/// The built-in data set is used unless a JSON seed file is supplied.
/// A seed file has the same shape the resources render:
/// `{ "users": [...], "projects": [...] }`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Project, ProjectId, ProjectStatus, Role, User, UserId};
use crate::storage::StorageError;

/// Initial contents of both collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl SeedData {
    /// The data set the server ships with
    pub fn builtin() -> Self {
        let user = |id, name: &str, email: &str, role| User {
            id: UserId(id),
            name: name.to_string(),
            email: email.to_string(),
            role,
        };
        let project = |id, name: &str, status, assigned_to| {
            Project::new(ProjectId(id), name.to_string(), status, UserId(assigned_to))
        };
        
        Self {
            users: vec![
                user(1, "Alice Johnson", "alice@example.com", Role::Admin),
                user(2, "Bob Smith", "bob@example.com", Role::User),
                user(3, "Carol Davis", "carol@example.com", Role::User),
            ],
            projects: vec![
                project(1, "Website Redesign", ProjectStatus::Active, 1),
                project(2, "Mobile App", ProjectStatus::Planning, 2),
                project(3, "API Migration", ProjectStatus::Completed, 3),
            ],
        }
    }
    
    /// Load seed data from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, StorageError> {
        let contents = std::fs::read_to_string(path)?;
        let seed = serde_json::from_str(&contents)?;
        
        tracing::info!("Loaded seed data from {}", path.display());
        Ok(seed)
    }
}
