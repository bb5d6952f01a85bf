//! CLI adapter for toolfinder
//!
//! Provides a command-line front end over the catalog search.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// toolfinder - find the right utility tool
///
/// Ranks a catalog of tools against a free-text query using title,
/// description and keyword matches.
#[derive(Parser, Debug)]
#[command(name = "toolfinder")]
#[command(version)]
#[command(about = "Keyword search over a catalog of utility tools", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank catalog items against a query
    Search(commands::SearchArgs),

    /// List every catalog item in display order
    List(commands::ListArgs),

    /// Show one catalog item
    Show(commands::ShowArgs),

    /// Pick a suggestion: print the new query text and the route to open
    Select(commands::SelectArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and server information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  toolfinder completions bash > ~/.local/share/bash-completion/completions/toolfinder
    ///   zsh:   toolfinder completions zsh > ~/.zfunc/_toolfinder
    ///   fish:  toolfinder completions fish > ~/.config/fish/completions/toolfinder.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration and catalog
    let config = Config::load()?;
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::List(args) => commands::list::execute(args, &services, cli.format).await,
        Commands::Show(args) => commands::show::execute(args, &services, cli.format).await,
        Commands::Select(args) => commands::select::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
