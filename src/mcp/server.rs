//! MCP server implementation

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::{error_response, ProtocolHandlers};
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};

pub struct McpServer {
    transport: StdioTransport,
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            transport: StdioTransport::stdio(),
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    /// Run the MCP server until stdin closes or Ctrl+C
    pub async fn run(&mut self) -> Result<(), McpError> {
        info!("Starting toolfinder MCP server");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin).lines();

        let mut shutdown = tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
        });

        loop {
            tokio::select! {
                line = reader.next_line() => {
                    match line? {
                        Some(line) if !line.trim().is_empty() => {
                            let response = process_line(&self.handlers, &line).await;
                            self.transport.send_response(response).await?;
                        }
                        None => break, // EOF
                        _ => continue,
                    }
                }

                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        info!("MCP server shutting down");
        Ok(())
    }
}

/// Parse one line and produce its response
///
/// Parse failures answer with a null id; handler failures are mapped to
/// their JSON-RPC code.
pub async fn process_line(handlers: &ProtocolHandlers, line: &str) -> JsonRpcResponse {
    debug!("Received: {}", line);

    let request: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            error!("Unparseable message: {}", e);
            return failure(None, McpError::ParseError(format!("Parse error: {e}")));
        }
    };

    if request.jsonrpc != "2.0" {
        let err = McpError::InvalidRequest(format!(
            "Unsupported jsonrpc version: {}",
            request.jsonrpc
        ));
        return failure(request.id, err);
    }

    let id = request.id.clone();
    match handlers.dispatch(request).await {
        Ok(response) => response,
        Err(e) => {
            error!("Error processing message: {}", e);
            failure(id, e)
        }
    }
}

fn failure(id: Option<serde_json::Value>, err: McpError) -> JsonRpcResponse {
    let (code, message) = err.code_and_message();
    error_response(id, code, message)
}
