/// MCP server implementation that handles JSON-RPC communication
/// 
/// This module implements the actual MCP server that:
/// 1. Reads newline-delimited JSON-RPC requests from stdin
/// 2. Hands tool calls and resource reads to the dispatcher
/// 3. Writes JSON-RPC responses to stdout

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::mcp::dispatcher::Dispatcher;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::storage::DirectoryStorage;
use crate::ServerError;

/// MCP server that handles communication with the client
pub struct McpServer<S: DirectoryStorage> {
    /// Router owning the directory store
    dispatcher: Dispatcher<S>,
    /// Whether the client has completed the initialize handshake
    initialized: bool,
}

impl<S: DirectoryStorage> McpServer<S> {
    /// Create a new MCP server
    pub fn new(dispatcher: Dispatcher<S>) -> Self {
        Self {
            dispatcher,
            initialized: false,
        }
    }
    
    /// Get a reference to the dispatcher (useful for testing)
    pub fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }
    
    /// Whether the client has sent the `initialized` notification
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
    
    /// Run the MCP server over stdin/stdout until EOF or Ctrl-C
    pub async fn run(&mut self) -> Result<(), ServerError> {
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        };
        
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), shutdown)
            .await
    }
    
    /// Serve requests from `reader`, writing responses to `writer`
    /// 
    /// Requests are handled strictly one at a time in arrival order. The
    /// loop ends when the reader hits EOF or `shutdown` resolves.
    pub async fn serve<R, W, F>(&mut self, mut reader: R, mut writer: W, shutdown: F) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        info!("Starting MCP server, waiting for JSON-RPC requests...");
        tokio::pin!(shutdown);
        
        let mut line = String::new();
        
        loop {
            line.clear();
            
            let read = tokio::select! {
                read = reader.read_line(&mut line) => Some(read),
                _ = &mut shutdown => None,
            };
            
            match read {
                None => {
                    info!("MCP server shutting down (interrupted)");
                    break;
                }
                Some(Ok(0)) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Some(Ok(_)) => {
                    if let Some(response) = self.handle_line(&line) {
                        let response_str = serde_json::to_string(&response)?;
                        
                        // Write response + newline
                        writer.write_all(response_str.as_bytes()).await?;
                        writer.write_all(b"\n").await?;
                        writer.flush().await?;
                        
                        debug!("Sent response: {}", response_str);
                    }
                }
                Some(Err(e)) => {
                    error!("Failed to read from stdin: {}", e);
                    return Err(e.into());
                }
            }
        }
        
        Ok(())
    }
    
    /// Process a single line of JSON-RPC input
    /// 
    /// Returns `None` for blank lines and notifications.
    pub fn handle_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        
        debug!("Processing request: {}", line);
        
        // Malformed JSON and well-formed JSON that is not a request are different errors
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None
                ));
            }
        };
        
        let request_id = message.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(message) {
            Ok(req) => req,
            Err(e) => {
                error!("Rejected invalid JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    request_id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                    None
                ));
            }
        };
        
        match request.id {
            Some(id) => Some(self.handle_request(id, &request.method, request.params)),
            None => {
                self.handle_notification(&request.method);
                None
            }
        }
    }
    
    /// Handle a notification (a request without an id)
    fn handle_notification(&mut self, method: &str) {
        match method {
            "notifications/initialized" | "initialized" => {
                self.initialized = true;
                info!("MCP client initialized");
            }
            other => debug!("Ignoring notification {}", other),
        }
    }
    
    /// Handle a JSON-RPC request
    fn handle_request(&mut self, id: Value, method: &str, params: Option<Value>) -> JsonRpcResponse {
        let result = match method {
            "initialize" => self.handle_initialize(params),
            "initialized" => {
                self.initialized = true;
                Ok(json!(null))
            }
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.dispatcher.list_tools() })),
            "tools/call" => self.handle_tools_call(params),
            "resources/list" => Ok(json!({ "resources": self.dispatcher.list_resources() })),
            "resources/read" => self.handle_resources_read(params),
            _ => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method '{}' not found", method),
                    None
                );
            }
        };
        
        match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => e.into_response(id),
        }
    }
    
    /// Handle MCP initialization request
    fn handle_initialize(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: InitializeParams = match params {
            Some(p) => serde_json::from_value(p).unwrap_or_else(|e| {
                warn!("Ignoring malformed initialize params: {}", e);
                InitializeParams::default()
            }),
            None => InitializeParams::default(),
        };
        
        match params.client_info {
            Some(client) => info!(
                "MCP client connected: {} {} (protocol {})",
                client.name,
                client.version.unwrap_or_default(),
                params.protocol_version.as_deref().unwrap_or("unknown")
            ),
            None => info!("MCP client connected"),
        }
        
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ListChangedCapability { list_changed: false }),
                resources: Some(ListChangedCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };
        
        to_value(result)
    }
    
    /// Handle tools/call request
    fn handle_tools_call(&mut self, params: Option<Value>) -> Result<Value, McpError> {
        let params: ToolCallParams = required_params(params)?;
        let result = self.dispatcher.call_tool(&params.name, params.arguments)?;
        to_value(result)
    }
    
    /// Handle resources/read request
    fn handle_resources_read(&mut self, params: Option<Value>) -> Result<Value, McpError> {
        let params: ReadResourceParams = required_params(params)?;
        let result = self.dispatcher.read_resource(&params.uri)?;
        to_value(result)
    }
}

/// Decode mandatory method params
fn required_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, McpError> {
    let params = params.ok_or_else(|| McpError::InvalidInput("Missing parameters".to_string()))?;
    serde_json::from_value(params)
        .map_err(|e| McpError::InvalidInput(format!("Invalid parameters: {}", e)))
}

/// Serialize a result payload
fn to_value<T: serde::Serialize>(result: T) -> Result<Value, McpError> {
    serde_json::to_value(result).map_err(|e| McpError::Internal(format!("Failed to serialize result: {}", e)))
}
