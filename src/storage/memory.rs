/// In-memory implementation of the directory storage interface
/// 
/// Both collections are plain vectors so iteration order is always the
/// order of seeding and creation.

use crate::domain::{validate_email, Project, ProjectStatus, User, UserId};
use crate::storage::{DirectoryStorage, ReferencePolicy, SeedData, StorageError};

/// Vector-backed storage owned by a single dispatcher
#[derive(Debug, Default)]
pub struct MemoryStorage {
    users: Vec<User>,
    projects: Vec<Project>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Build a store from seed data
    /// 
    /// Seed users go through the same uniqueness and email checks as
    /// created users. Project references are only checked under
    /// `ReferencePolicy::Strict`.
    pub fn from_seed(seed: SeedData, policy: ReferencePolicy) -> Result<Self, StorageError> {
        let mut storage = Self::new();
        
        for user in seed.users {
            validate_email(&user.email)?;
            storage.insert_user(user)?;
        }
        
        for project in seed.projects {
            if storage.projects.iter().any(|p| p.id == project.id) {
                return Err(StorageError::DuplicateProjectId { project_id: project.id });
            }
            
            if policy == ReferencePolicy::Strict
                && storage.find_user_by_id(project.assigned_to).is_none()
            {
                return Err(StorageError::DanglingReference {
                    project_id: project.id,
                    user_id: project.assigned_to,
                });
            }
            
            storage.projects.push(project);
        }
        
        tracing::info!(
            "In-memory storage initialized with {} users and {} projects",
            storage.users.len(),
            storage.projects.len()
        );
        
        Ok(storage)
    }
}

impl DirectoryStorage for MemoryStorage {
    fn find_user_by_id(&self, user_id: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == user_id).cloned()
    }
    
    fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }
    
    fn email_exists(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }
    
    fn next_user_id(&self) -> Result<UserId, StorageError> {
        match self.users.iter().map(|u| u.id).max() {
            Some(last) => last
                .checked_next()
                .ok_or(StorageError::UserIdsExhausted { last }),
            None => Ok(UserId::FIRST),
        }
    }
    
    fn insert_user(&mut self, user: User) -> Result<(), StorageError> {
        if self.users.iter().any(|u| u.id == user.id) {
            return Err(StorageError::DuplicateUserId { user_id: user.id });
        }
        
        if self.email_exists(&user.email) {
            return Err(StorageError::DuplicateEmail { email: user.email });
        }
        
        self.users.push(user);
        Ok(())
    }
    
    fn list_projects(&self, status: Option<ProjectStatus>) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .cloned()
            .collect()
    }
    
    fn user_count(&self) -> usize {
        self.users.len()
    }
    
    fn project_count(&self) -> usize {
        self.projects.len()
    }
}
