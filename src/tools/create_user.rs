/// Tool for creating new users
/// 
/// This module implements the create_user MCP tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::{Role, User};
use crate::storage::DirectoryStorage;
use crate::tools::ToolError;

/// Create a new user
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateUserParams {
    /// User's full name
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's role
    pub role: Role,
}

/// Create a user using the provided storage
/// 
/// The email shape is checked before uniqueness, so a malformed address
/// is always reported as invalid input even if it happens to be taken.
pub fn create_user<S: DirectoryStorage>(
    storage: &mut S,
    params: CreateUserParams,
) -> Result<User, ToolError> {
    let user = User::new(storage.next_user_id()?, params.name, params.email, params.role)
        .map_err(|_| ToolError::InvalidInput("Invalid email format".to_string()))?;
    
    if storage.email_exists(&user.email) {
        return Err(ToolError::Conflict("User with this email already exists".to_string()));
    }
    
    storage.insert_user(user.clone())?;
    
    tracing::info!("Created user {} <{}> with ID {}", user.name, user.email, user.id);
    
    Ok(user)
}
