/// Tool for looking up a single user
/// 
/// This module implements the get_user MCP tool.

use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Number;

use crate::domain::{User, UserId};
use crate::storage::DirectoryStorage;
use crate::tools::ToolError;

/// Get user information by ID
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetUserParams {
    /// The user ID to retrieve
    #[serde(rename = "userId", deserialize_with = "integer")]
    #[schemars(with = "i64")]
    pub user_id: Number,
}

/// Accept any integral number, including ones no stored id can match
fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
    let number = Number::deserialize(deserializer)?;
    
    let integral = number.is_i64()
        || number.is_u64()
        || number.as_f64().map_or(false, |f| f.is_finite() && f.fract() == 0.0);
    
    if integral {
        Ok(number)
    } else {
        Err(D::Error::custom(format!("invalid value: {}, expected an integer", number)))
    }
}

/// The stored id an integer could name, if it fits the id range at all
fn as_user_id(number: &Number) -> Option<UserId> {
    if let Some(id) = number.as_u64() {
        return Some(UserId(id));
    }
    
    // Integral floats such as 2.0 or literals too large for u64
    number
        .as_f64()
        .filter(|f| *f >= 0.0 && *f < u64::MAX as f64)
        .map(|f| UserId(f as u64))
}

/// Look up a user using the provided storage
pub fn get_user<S: DirectoryStorage>(
    storage: &S,
    params: GetUserParams,
) -> Result<User, ToolError> {
    as_user_id(&params.user_id)
        .and_then(|id| storage.find_user_by_id(id))
        .ok_or_else(|| ToolError::NotFound(format!("User with ID {} not found", params.user_id)))
}
