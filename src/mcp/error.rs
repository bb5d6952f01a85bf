//! MCP-specific error types

use crate::mcp::protocol::{
    CATALOG_ERROR, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, ITEM_NOT_FOUND, PARSE_ERROR,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC code and message for an error response
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<crate::core::error::ToolfinderError> for McpError {
    fn from(err: crate::core::error::ToolfinderError) -> Self {
        use crate::core::error::ToolfinderError;
        let message = err.to_string();
        match err {
            ToolfinderError::ItemNotFound(id) => {
                McpError::ToolError(ITEM_NOT_FOUND, format!("Item not found: {id}"))
            }
            ToolfinderError::EmptyCatalog
            | ToolfinderError::DuplicateId(_)
            | ToolfinderError::InvalidItem(_)
            | ToolfinderError::CatalogError(_) => McpError::ToolError(CATALOG_ERROR, message),
            ToolfinderError::ConfigError(s) => {
                McpError::InvalidParams(format!("Configuration error: {s}"))
            }
            ToolfinderError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            ToolfinderError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            ToolfinderError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
