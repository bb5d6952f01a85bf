//! Get server info tool handler
//!
//! Returns version and catalog summary for the running toolfinder-mcp server.

use super::handler::{text_content, McpToolHandler};
use crate::core::catalog::Catalog;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

/// Tools exposed by the server, with one-line summaries
pub const TOOL_SUMMARIES: &[(&str, &str)] = &[
    ("search_catalog", "Rank catalog tools against a query"),
    ("list_catalog", "List every tool in display order"),
    ("get_item", "Show one tool by id"),
    ("select_item", "Select a suggestion and get its route"),
    ("get_server_info", "Show server version (this tool)"),
    ("show_config", "Show current configuration"),
];

pub struct GetServerInfoHandler {
    catalog: Arc<Catalog>,
}

impl GetServerInfoHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn format_info(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let rust_version = env!("CARGO_PKG_RUST_VERSION");

        let mut output = String::from("# Toolfinder MCP Server Information\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {version}\n"));
        output.push_str(&format!("- **Rust Version:** {rust_version}\n\n"));

        output.push_str("## Server Details\n");
        output.push_str("- **Name:** toolfinder-mcp\n");
        output.push_str("- **Description:** Keyword search over a catalog of utility tools\n");
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n"));
        output.push_str(&format!("- **Catalog Items:** {}\n\n", self.catalog.len()));

        output.push_str("## Available Tools\n");
        for (name, summary) in TOOL_SUMMARIES {
            output.push_str(&format!("- {name}: {summary}\n"));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version information about the running toolfinder-mcp server. \
                         Returns server version, protocol version, catalog size and \
                         available tools."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        Ok(text_content(self.format_info()))
    }
}
