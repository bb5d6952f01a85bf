//! Show config tool handler
//!
//! Returns the current configuration of the running toolfinder-mcp server.

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ShowConfigHandler {
    config: Arc<Config>,
    catalog: Arc<Catalog>,
}

#[derive(Deserialize)]
struct ShowConfigArgs {
    #[serde(default)]
    detailed: bool,
}

impl ShowConfigHandler {
    pub fn new(config: Arc<Config>, catalog: Arc<Catalog>) -> Self {
        Self { config, catalog }
    }

    fn format_config(&self) -> String {
        let mut output = String::from("# Toolfinder MCP Configuration\n\n");

        output.push_str("## Catalog\n");
        match &self.config.catalog.path {
            Some(path) => output.push_str(&format!("- **Source:** {}\n", path.display())),
            None => output.push_str("- **Source:** built-in\n"),
        }
        output.push_str(&format!("- **Items:** {}\n\n", self.catalog.len()));

        output.push_str("## Search\n");
        output.push_str(&format!(
            "- **Default Limit:** {}\n",
            self.config.search.default_limit
        ));
        output.push_str(&format!("- **Max Limit:** {}\n", self.config.search.max_limit));
        output.push_str(&format!(
            "- **Max Query Length:** {}\n",
            self.config.search.max_query_length
        ));

        output
    }

    fn format_config_detailed(&self) -> String {
        let mut output = self.format_config();

        output.push_str("\n## Item IDs\n");
        for id in self.catalog.ids() {
            output.push_str(&format!("- `{id}`\n"));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for ShowConfigHandler {
    fn name(&self) -> &str {
        "show_config"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "show_config".to_string(),
            description: "Show the current configuration of the running toolfinder-mcp server: \
                         catalog source and search limits."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "detailed": {
                        "type": "boolean",
                        "description": "Also list every catalog item id",
                        "default": false
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ShowConfigArgs = parse_args(args)?;

        let text = if args.detailed {
            self.format_config_detailed()
        } else {
            self.format_config()
        };

        Ok(text_content(text))
    }
}
