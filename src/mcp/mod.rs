/// MCP protocol implementation
/// 
/// This module handles the Model Context Protocol communication:
/// JSON-RPC framing, the capability catalog, and routing requests to
/// tools and resources.

pub mod catalog;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod server;

// Re-export main types
pub use dispatcher::Dispatcher;
pub use error::{ErrorKind, McpError};
pub use server::McpServer;
