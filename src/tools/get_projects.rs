/// Tool for listing projects
/// 
/// This module implements the get_projects MCP tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::{Project, ProjectStatus};
use crate::storage::DirectoryStorage;
use crate::tools::ToolError;

/// Get projects, optionally filtered by status
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetProjectsParams {
    /// Filter projects by status
    pub status: Option<ProjectStatus>,
}

/// List projects using the provided storage
pub fn get_projects<S: DirectoryStorage>(
    storage: &S,
    params: GetProjectsParams,
) -> Result<Vec<Project>, ToolError> {
    Ok(storage.list_projects(params.status))
}
