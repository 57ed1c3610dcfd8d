/// Protocol-facing errors returned by the dispatcher
/// 
/// Every failed tool call or resource read ends up as one of these, and
/// each maps onto a JSON-RPC error object with a stable code and a `kind`
/// tag in `data`.

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::mcp::protocol::{error_codes, JsonRpcResponse};
use crate::storage::StorageError;
use crate::tools::ToolError;

/// Classification of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    InvalidInput,
    Conflict,
    NotFound,
    MethodNotFound,
    InternalError,
}

/// A failure reported to the caller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum McpError {
    #[error("{0}")]
    InvalidInput(String),
    
    #[error("{0}")]
    Conflict(String),
    
    #[error("{0}")]
    NotFound(String),
    
    #[error("Unknown resource: {uri}")]
    UnknownResource { uri: String },
    
    #[error("Unknown tool: {name}")]
    MethodNotFound { name: String },
    
    #[error("Error executing tool {tool}: {message}")]
    ToolFailed { tool: String, message: String },
    
    #[error("Error reading resource {uri}: {message}")]
    ResourceFailed { uri: String, message: String },
    
    #[error("Internal error: {0}")]
    Internal(String),
}

impl McpError {
    /// The kind of failure this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            McpError::InvalidInput(_) => ErrorKind::InvalidInput,
            McpError::Conflict(_) => ErrorKind::Conflict,
            McpError::NotFound(_) | McpError::UnknownResource { .. } => ErrorKind::NotFound,
            McpError::MethodNotFound { .. } => ErrorKind::MethodNotFound,
            McpError::ToolFailed { .. }
            | McpError::ResourceFailed { .. }
            | McpError::Internal(_) => ErrorKind::InternalError,
        }
    }
    
    /// JSON-RPC error code for this failure
    /// 
    /// An unknown resource is a malformed request rather than a missing
    /// entity, so it carries the Invalid Request code.
    pub fn code(&self) -> i32 {
        match self {
            McpError::InvalidInput(_) => error_codes::INVALID_PARAMS,
            McpError::Conflict(_) => error_codes::CONFLICT,
            McpError::NotFound(_) => error_codes::NOT_FOUND,
            McpError::UnknownResource { .. } => error_codes::INVALID_REQUEST,
            McpError::MethodNotFound { .. } => error_codes::METHOD_NOT_FOUND,
            McpError::ToolFailed { .. }
            | McpError::ResourceFailed { .. }
            | McpError::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }
    
    /// Normalize a handler failure for the named tool
    /// 
    /// Typed failures pass through unchanged; anything else is wrapped
    /// with the tool name and the underlying message.
    pub fn from_tool_error(tool: &str, error: ToolError) -> Self {
        match error {
            ToolError::InvalidInput(message) => McpError::InvalidInput(message),
            ToolError::Conflict(message) => McpError::Conflict(message),
            ToolError::NotFound(message) => McpError::NotFound(message),
            ToolError::Storage(error @ StorageError::DuplicateEmail { .. }) => {
                McpError::Conflict(error.to_string())
            }
            other => McpError::ToolFailed {
                tool: tool.to_string(),
                message: other.to_string(),
            },
        }
    }
    
    /// Build the JSON-RPC error response for this failure
    pub fn into_response(self, id: Value) -> JsonRpcResponse {
        let data = json!({ "kind": self.kind() });
        JsonRpcResponse::error(id, self.code(), self.to_string(), Some(data))
    }
}
