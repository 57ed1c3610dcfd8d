/// Project entity
/// 
/// Projects are seeded at startup and are read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::{ProjectId, ProjectStatus, UserId};

/// A unit of work tracked by the directory
/// 
/// `assigned_to` is a soft reference: nothing guarantees a user with that
/// id exists unless the store was built with strict reference checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
    pub assigned_to: UserId,
}

impl Project {
    pub fn new(id: ProjectId, name: String, status: ProjectStatus, assigned_to: UserId) -> Self {
        Self {
            id,
            name,
            status,
            assigned_to,
        }
    }
}
