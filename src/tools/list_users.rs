/// Tool for listing all users
/// 
/// This module implements the list_users MCP tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::User;
use crate::storage::DirectoryStorage;
use crate::tools::ToolError;

/// List all users in the system
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListUsersParams {}

/// List users using the provided storage
pub fn list_users<S: DirectoryStorage>(
    storage: &S,
    _params: ListUsersParams,
) -> Result<Vec<User>, ToolError> {
    Ok(storage.list_users())
}
