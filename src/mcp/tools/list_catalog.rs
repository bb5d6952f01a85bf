//! List catalog tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::catalog::Catalog;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListCatalogHandler {
    catalog: Arc<Catalog>,
}

#[derive(Deserialize)]
struct ListArgs {
    #[serde(default)]
    keywords: bool,
}

impl ListCatalogHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn format_catalog(&self, with_keywords: bool) -> String {
        let mut output = format!("# Tool Catalog\n\n**Total tools:** {}\n\n", self.catalog.len());

        output.push_str("| ID | Title | Description | Route |\n");
        output.push_str("|----|-------|-------------|-------|\n");
        for item in &*self.catalog {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                item.id,
                item.title,
                item.description,
                item.route()
            ));
        }

        if with_keywords {
            output.push_str("\n## Keywords\n");
            for item in &*self.catalog {
                output.push_str(&format!("- **{}:** {}\n", item.id, item.keywords.join(", ")));
            }
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for ListCatalogHandler {
    fn name(&self) -> &str {
        "list_catalog"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_catalog".to_string(),
            description: "List every tool in the catalog in display order, with id, title, \
                         description and route."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "keywords": {
                        "type": "boolean",
                        "description": "Include each tool's search keywords",
                        "default": false
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ListArgs = parse_args(args)?;
        Ok(text_content(self.format_catalog(args.keywords)))
    }
}
