//! Select item tool handler
//!
//! Mirrors picking a suggestion: the query becomes the tool's title and
//! the caller is pointed at the tool's route.

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::search::SearchService;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SelectItemHandler {
    search: Arc<SearchService>,
}

#[derive(Deserialize)]
struct SelectArgs {
    id: String,
}

impl SelectItemHandler {
    pub fn new(search: Arc<SearchService>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl McpToolHandler for SelectItemHandler {
    fn name(&self) -> &str {
        "select_item"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "select_item".to_string(),
            description: "Select a suggested tool by id. Returns the query text to show \
                         (the tool's title) and the route to open."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Tool id from a search suggestion"
                    }
                },
                "required": ["id"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SelectArgs = parse_args(args)?;
        let selection = self.search.select(args.id.trim())?;

        tracing::debug!("Selected '{}' -> {}", selection.id, selection.route);

        let text = format!(
            "Selected **{}**\n\n- **Query:** {}\n- **Route:** {}\n",
            selection.id, selection.query, selection.route
        );
        Ok(text_content(text))
    }
}
