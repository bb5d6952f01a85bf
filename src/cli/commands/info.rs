//! Info command - show version and server information

use crate::cli::output::print_json;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show detailed information
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub protocol: String,
    pub tools: u32,
    pub config_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_items: Option<usize>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = crate::core::xdg::XdgDirs::new();
    let config_dir = xdg.config_dir.to_string_lossy().into_owned();

    let catalog_items = if args.detailed {
        Some(services.catalog.len())
    } else {
        None
    };

    let info = InfoResponse {
        name: "toolfinder".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: "MCP 2024-11-05".to_string(),
        tools: 6,
        config_dir,
        catalog_items,
    };

    match format {
        OutputFormat::Human => {
            println!("toolfinder {}", info.version);
            println!("Protocol: {}", info.protocol);
            println!("Tools: {}", info.tools);
            println!("Config: {}", info.config_dir);
            if let Some(count) = info.catalog_items {
                println!("Catalog items: {count}");
            }
        }
        OutputFormat::Json => print_json(&info)?,
    }

    Ok(())
}
