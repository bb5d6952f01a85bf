//! List command - print the catalog in display order

use crate::cli::output::{colors, format_keywords, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::CatalogItem;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Also print each item's keywords
    #[arg(long)]
    pub keywords: bool,
}

/// Catalog listing
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: usize,
    pub items: Vec<CatalogItem>,
}

/// Execute the list command
pub async fn execute(
    args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ListResponse {
        total: services.catalog.len(),
        items: services.catalog.items().to_vec(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} tool(s):\n",
                colors::number(&response.total.to_string())
            );
            for item in &response.items {
                println!("{} {}", item.title, colors::item_id(&item.id));
                println!("    {}", colors::dim(&item.description));
                if args.keywords {
                    println!(
                        "    {} {}",
                        colors::label("keywords:"),
                        format_keywords(&item.keywords)
                    );
                }
            }
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
