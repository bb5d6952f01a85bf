//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod info;
pub mod list;
pub mod search;
pub mod select;
pub mod show;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use list::ListArgs;
pub use search::SearchArgs;
pub use select::SelectArgs;
pub use show::ShowArgs;
