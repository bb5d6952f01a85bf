//! Get item tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::catalog::Catalog;
use crate::core::types::CatalogItem;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetItemHandler {
    catalog: Arc<Catalog>,
}

#[derive(Deserialize)]
struct GetItemArgs {
    id: String,
}

impl GetItemHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

fn format_item(item: &CatalogItem) -> String {
    let mut output = format!("# {}\n\n", item.title);
    output.push_str(&format!("- **ID:** {}\n", item.id));
    output.push_str(&format!("- **Route:** {}\n", item.route()));
    output.push_str(&format!("- **Description:** {}\n", item.description));
    if item.keywords.is_empty() {
        output.push_str("- **Keywords:** (none)\n");
    } else {
        output.push_str(&format!("- **Keywords:** {}\n", item.keywords.join(", ")));
    }
    output
}

#[async_trait]
impl McpToolHandler for GetItemHandler {
    fn name(&self) -> &str {
        "get_item"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_item".to_string(),
            description: "Get one catalog tool by id: title, description, keywords and route."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Tool id, e.g. 'pdf-merger'"
                    }
                },
                "required": ["id"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: GetItemArgs = parse_args(args)?;
        let item = self.catalog.require(args.id.trim())?;
        Ok(text_content(format_item(item)))
    }
}
