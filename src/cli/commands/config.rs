//! Config command - show current configuration

use crate::cli::output::{print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list the ids of the loaded catalog
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub catalog: CatalogSummary,
    pub search: SearchSummary,
}

#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub source: String,
    pub items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SearchSummary {
    pub default_limit: usize,
    pub max_limit: usize,
    pub max_query_length: usize,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let xdg = crate::core::xdg::XdgDirs::new();
    let config_file = xdg.config_file().to_string_lossy().into_owned();

    let source = match &config.catalog.path {
        Some(path) => path.to_string_lossy().into_owned(),
        None => "built-in".to_string(),
    };

    let response = ConfigResponse {
        config_file,
        catalog: CatalogSummary {
            source,
            items: services.catalog.len(),
            ids: args.all.then(|| {
                services
                    .catalog
                    .ids()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }),
        },
        search: SearchSummary {
            default_limit: config.search.default_limit,
            max_limit: config.search.max_limit,
            max_query_length: config.search.max_query_length,
        },
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  catalog:");
            println!("    source: {}", response.catalog.source);
            println!("    items: {}", response.catalog.items);
            if let Some(ids) = &response.catalog.ids {
                println!("    ids: {ids:?}");
            }
            println!("  search:");
            println!("    default_limit: {}", response.search.default_limit);
            println!("    max_limit: {}", response.search.max_limit);
            println!(
                "    max_query_length: {}",
                response.search.max_query_length
            );
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
