//! Show command - details of a single catalog item

use crate::cli::output::{colors, format_keywords, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Catalog id (e.g. pdf-merger)
    pub id: String,
}

/// Item details
#[derive(Debug, Serialize)]
pub struct ShowResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub route: String,
    /// Zero-based position in the catalog
    pub position: usize,
}

/// Execute the show command
pub async fn execute(
    args: ShowArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(position) = services.catalog.iter().position(|item| item.id == args.id) else {
        return Err(format!(
            "Item '{}' not found. Run 'toolfinder list' to see available tools.",
            args.id
        )
        .into());
    };
    let item = &services.catalog.items()[position];

    let response = ShowResponse {
        id: item.id.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        keywords: item.keywords.clone(),
        route: item.route(),
        position,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label(&response.title));
            println!("  id: {}", colors::item_id(&response.id));
            println!("  description: {}", response.description);
            println!("  keywords: {}", format_keywords(&response.keywords));
            println!("  route: {}", colors::route(&response.route));
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
