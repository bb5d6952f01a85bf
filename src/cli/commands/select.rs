//! Select command - pick a suggestion and resolve its route

use crate::cli::output::{colors, print_json, print_success};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the select command
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Catalog id of the picked suggestion
    pub id: String,
}

/// Execute the select command
pub async fn execute(
    args: SelectArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = services.search.select(&args.id).map_err(|e| {
        if e.is_not_found() {
            format!(
                "Item '{}' not found. Run 'toolfinder list' to see available tools.",
                args.id
            )
        } else {
            e.to_string()
        }
    })?;

    match format {
        OutputFormat::Human => {
            print_success(&format!("Selected {}", selection.id));
            println!("Query: {}", colors::label(&selection.query));
            println!("Open:  {}", colors::route(&selection.route));
        }
        OutputFormat::Json => print_json(&selection)?,
    }

    Ok(())
}
