//! Search catalog tool handler

use super::handler::{parse_args, text_content, McpToolHandler};
use crate::core::services::Services;
use crate::core::types::SearchOutcome;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchCatalogHandler {
    services: Arc<Services>,
}

#[derive(Deserialize)]
struct SearchArgs {
    #[serde(default)]
    query: String,
    #[serde(default)]
    limit: Option<usize>,
}

impl SearchCatalogHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_outcome(&self, outcome: &SearchOutcome, limit: usize) -> String {
        if outcome.is_reset() {
            let mut output = format!(
                "Empty query: all {} tools are available.\n\n",
                outcome.total
            );
            for item in self.services.catalog.iter().take(limit) {
                output.push_str(&format!(
                    "- **{}** (`{}`): {}\n",
                    item.title, item.id, item.description
                ));
            }
            return output;
        }

        let mut output = format!(
            "Found {} of {} tools for query '{}':\n\n",
            outcome.visible_count(),
            outcome.total,
            outcome.query
        );

        if outcome.matches.is_empty() {
            output.push_str("No tools matched. Try a shorter word or a different keyword.");
            return output;
        }

        for (i, m) in outcome.matches.iter().take(limit).enumerate() {
            output.push_str(&format!(
                "{}. **{}** (`{}`, score: {})\n   {}\n   Route: `{}`\n",
                i + 1,
                m.item.title,
                m.item.id,
                m.score,
                m.item.description,
                m.item.route()
            ));
        }

        output.push_str("\n## Suggestions\n");
        for s in &outcome.suggestions {
            output.push_str(&format!("- {} ({})\n", s.item.title, s.item.id));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for SearchCatalogHandler {
    fn name(&self) -> &str {
        "search_catalog"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_catalog".to_string(),
            description: "Find utility tools by free-text query. Matches the query against each \
                         tool's title (+10), description (+5) and keywords (+3, either direction \
                         of substring), returns matches best first plus the top 5 as suggestions. \
                         An empty query lists every tool."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search text, e.g. 'pdf', 'compress', 'qr code'",
                        "maxLength": self.services.config.search.max_query_length
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Max matches to list",
                        "default": self.services.config.search.default_limit,
                        "minimum": 1,
                        "maximum": self.services.config.search.max_limit
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SearchArgs = parse_args(args)?;

        if let Some(limit) = args.limit {
            if limit == 0 || limit > self.services.config.search.max_limit {
                return Err(McpError::InvalidParams(format!(
                    "limit must be between 1 and {}",
                    self.services.config.search.max_limit
                )));
            }
        }
        let limit = self.services.config.clamp_limit(args.limit);

        let outcome = self.services.search.search(&args.query);

        Ok(text_content(self.format_outcome(&outcome, limit)))
    }
}
