//! Toolfinder CLI - search the tool catalog from the command line
//!
//! # Examples
//!
//! ```bash
//! # Rank tools for a query
//! toolfinder search "pdf"
//!
//! # Only the top suggestions, as JSON
//! toolfinder --format json search "image" --suggestions-only
//!
//! # Pick a tool and get its route
//! toolfinder select qr-generator
//! ```

use clap::Parser;
use toolfinder::cli::output::print_error;
use toolfinder::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolfinder=warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
