//! Toolfinder MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes catalog search and selection
//! as tools for MCP clients.

use std::sync::Arc;
use toolfinder::core::config::Config;
use toolfinder::core::services::Services;
use toolfinder::core::xdg::XdgDirs;
use toolfinder::mcp::McpServer;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolfinder=info"));

    // stdout carries the protocol, logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false);

    if std::env::var("TOOLFINDER_LOG_JSON").is_ok_and(|v| v == "1" || v == "true") {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    let services = match Services::new(config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            eprintln!("Failed to load catalog: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Catalog ready with {} items", services.catalog.len());

    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
