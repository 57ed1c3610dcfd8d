/// Public library interface for the Team Directory MCP server
/// 
/// This module exports the server, its configuration, and the layers
/// underneath it (domain, storage, tools, resources, MCP protocol) so
/// they can be driven directly from tests.

use std::path::PathBuf;
use thiserror::Error;

pub mod domain;
pub mod storage;
pub mod tools;
pub mod resources;
pub mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use storage::{DirectoryStorage, MemoryStorage, ReferencePolicy, SeedData, StorageError};
pub use mcp::{Dispatcher, ErrorKind, McpError, McpServer};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
    
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Startup options for the directory server
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// JSON seed file replacing the built-in data set
    pub seed_path: Option<PathBuf>,
    /// Reject seed projects assigned to users that don't exist
    pub strict_references: bool,
}

/// Team directory server that implements the MCP protocol
/// 
/// The server owns a single in-memory store for the whole process
/// lifetime and serves tools and resources over it.
pub struct DirectoryServer {
    dispatcher: Dispatcher<MemoryStorage>,
}

impl DirectoryServer {
    /// Create a new directory server from the given configuration
    /// 
    /// The store is seeded from `config.seed_path` when set, otherwise
    /// from the built-in data set.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let seed = match &config.seed_path {
            Some(path) => {
                tracing::info!("Initializing Team Directory server with seed file: {:?}", path);
                SeedData::from_file(path)?
            }
            None => {
                tracing::info!("Initializing Team Directory server with built-in seed data");
                SeedData::builtin()
            }
        };
        
        let policy = if config.strict_references {
            ReferencePolicy::Strict
        } else {
            ReferencePolicy::Loose
        };
        
        let storage = MemoryStorage::from_seed(seed, policy)?;
        
        Ok(Self {
            dispatcher: Dispatcher::new(storage),
        })
    }
    
    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    /// 
    /// This method will block until stdin closes or Ctrl-C is received.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Starting MCP server with {} users and {} projects",
            self.dispatcher.storage().user_count(),
            self.dispatcher.storage().project_count()
        );
        
        let mut mcp_server = self.into_mcp_server();
        mcp_server.run().await?;
        
        Ok(())
    }
    
    /// Turn this server into a protocol handler without binding stdio
    pub fn into_mcp_server(self) -> McpServer<MemoryStorage> {
        McpServer::new(self.dispatcher)
    }
    
    /// Get a reference to the store (useful for testing)
    pub fn storage(&self) -> &MemoryStorage {
        self.dispatcher.storage()
    }
}
