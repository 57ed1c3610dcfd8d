/// Request dispatcher: routes tool calls and resource reads
/// 
/// The dispatcher owns the store for the lifetime of the server. Routing
/// is an exact name (or URI) match; arguments are turned into the tool's
/// typed params before the tool runs, and every outcome is normalized
/// into either a protocol result or an `McpError`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::mcp::catalog::{self, CREATE_USER, GET_PROJECTS, GET_USER, LIST_USERS};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ReadResourceResult, ResourceDefinition, ToolCallResult, ToolDefinition};
use crate::resources::{self, ProcessClock, SystemClock, PROJECTS_URI, STATUS_URI, USERS_URI};
use crate::storage::DirectoryStorage;
use crate::tools::{self, ToolError};

/// Routes requests to tools and resources over one owned store
pub struct Dispatcher<S: DirectoryStorage> {
    storage: S,
    clock: Box<dyn ProcessClock>,
}

impl<S: DirectoryStorage> Dispatcher<S> {
    /// Create a dispatcher whose uptime starts now
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, Box::new(SystemClock::start()))
    }
    
    /// Create a dispatcher reading process metadata from the given clock
    pub fn with_clock(storage: S, clock: Box<dyn ProcessClock>) -> Self {
        Self { storage, clock }
    }
    
    /// Get a reference to the store (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }
    
    /// Tools advertised to the caller
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        catalog::tool_definitions()
    }
    
    /// Resources advertised to the caller
    pub fn list_resources(&self) -> Vec<ResourceDefinition> {
        catalog::resource_definitions()
    }
    
    /// Invoke a tool by name
    pub fn call_tool(
        &mut self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<ToolCallResult, McpError> {
        debug!("Calling tool {} with {} argument(s)", name, arguments.len());
        
        let outcome = match name {
            GET_USER => parse_params(arguments)
                .and_then(|params| tools::get_user(&self.storage, params))
                .and_then(|user| render(&user)),
            LIST_USERS => parse_params(arguments)
                .and_then(|params| tools::list_users(&self.storage, params))
                .and_then(|users| render(&users)),
            CREATE_USER => parse_params(arguments)
                .and_then(|params| tools::create_user(&mut self.storage, params))
                .and_then(|user| render(&user)),
            GET_PROJECTS => parse_params(arguments)
                .and_then(|params| tools::get_projects(&self.storage, params))
                .and_then(|projects| render(&projects)),
            _ => {
                warn!("Rejected call to unknown tool {}", name);
                return Err(McpError::MethodNotFound { name: name.to_string() });
            }
        };
        
        outcome.map(ToolCallResult::success).map_err(|e| {
            let error = McpError::from_tool_error(name, e);
            warn!("Tool {} failed ({:?}): {}", name, error.kind(), error);
            error
        })
    }
    
    /// Read a resource by URI
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        debug!("Reading resource {}", uri);
        
        let content = match uri {
            USERS_URI => resources::read_users(&self.storage),
            PROJECTS_URI => resources::read_projects(&self.storage),
            STATUS_URI => resources::read_status(&self.storage, self.clock.as_ref()),
            _ => {
                warn!("Rejected read of unknown resource {}", uri);
                return Err(McpError::UnknownResource { uri: uri.to_string() });
            }
        };
        
        content
            .map(|c| ReadResourceResult::text(uri, c.mime_type, c.text))
            .map_err(|e| {
                warn!("Resource {} failed: {}", uri, e);
                McpError::ResourceFailed {
                    uri: uri.to_string(),
                    message: e.to_string(),
                }
            })
    }
}

/// Build a tool's typed params from the raw argument map
fn parse_params<T: DeserializeOwned>(arguments: Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::InvalidInput(format!("Invalid arguments: {}", e)))
}

/// Render tool output as pretty-printed JSON text
fn render<T: Serialize>(value: &T) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}
