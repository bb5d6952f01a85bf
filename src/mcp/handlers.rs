//! MCP protocol method handlers

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{
    GetItemHandler, GetServerInfoHandler, ListCatalogHandler, SearchCatalogHandler,
    SelectItemHandler, ShowConfigHandler, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();

        registry.register(Arc::new(SearchCatalogHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(ListCatalogHandler::new(Arc::clone(
            &services.catalog,
        ))));
        registry.register(Arc::new(GetItemHandler::new(Arc::clone(&services.catalog))));
        registry.register(Arc::new(SelectItemHandler::new(Arc::clone(
            &services.search,
        ))));
        registry.register(Arc::new(GetServerInfoHandler::new(Arc::clone(
            &services.catalog,
        ))));
        registry.register(Arc::new(ShowConfigHandler::new(
            Arc::clone(&services.config),
            Arc::clone(&services.catalog),
        )));

        debug!("Registered {} tools", registry.len());

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Route a request to its method handler
    ///
    /// Notifications other than `initialized` are ignored; they never get
    /// a reply.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        match request.method.as_str() {
            "initialized" | "notifications/initialized" => {
                self.handle_initialized(request).await
            }
            method if request.id.is_none() => {
                debug!("Ignoring notification '{}'", method);
                Ok(notification_ack())
            }
            "initialize" => self.handle_initialize(request).await,
            "tools/list" => self.handle_tools_list(request).await,
            "tools/call" => self.handle_tools_call(request).await,
            "ping" => self.handle_ping(request).await,
            _ => Ok(error_response(
                request.id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            )),
        }
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params {
            Some(Value::Null) | None => InitializeParams::default(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| McpError::InvalidParams(format!("Invalid initialize params: {e}")))?,
        };

        match &params.client_info {
            Some(client) => info!(
                "Client '{}' initializing (protocol {})",
                client.name,
                params.protocol_version.as_deref().unwrap_or("unspecified")
            ),
            None => info!("Client initializing"),
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "toolfinder-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(success_response(request.id, serde_json::to_value(result)?))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        Ok(notification_ack())
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(success_response(request.id, json!({ "tools": tools })))
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let Some(params_value) = request.params else {
            return Ok(error_response(
                request.id,
                INVALID_PARAMS,
                "Missing params".to_string(),
            ));
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(error_response(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let Some(handler) = self.tool_registry.get(&params.name) else {
            return Ok(error_response(
                request.id,
                INVALID_PARAMS,
                format!("Tool not found: {}", params.name),
            ));
        };

        debug!("Calling tool '{}'", params.name);

        match handler.execute(params.arguments).await {
            Ok(result) => Ok(success_response(request.id, serde_json::to_value(result)?)),
            Err(e) => {
                debug!("Tool '{}' failed: {}", params.name, e);
                let (code, message) = e.code_and_message();
                Ok(error_response(request.id, code, message))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(success_response(request.id, json!({})))
    }
}

/// Empty response that the transport drops instead of writing
fn notification_ack() -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id: None,
        result: None,
        error: None,
    }
}

fn success_response(id: Option<Value>, result: Value) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: Some(result),
        error: None,
    }
}

/// Build a JSON-RPC error response
pub fn error_response(id: Option<Value>, code: i32, message: String) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(JsonRpcError {
            code,
            message,
            data: None,
        }),
    }
}
