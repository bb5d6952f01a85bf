//! toolfinder - keyword search over a catalog of utility tools
//!
//! Filters and ranks a fixed catalog of tools (PDF merger, QR code
//! generator, image converter, ...) against a free-text query. Each
//! item is checked for a title, description and keyword hit; hits add
//! fixed weights to a relevance score and the top matches double as
//! quick-pick suggestions.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - catalog (validated item list, built-in or from file)
//!   - search (pure ranking function, selection)
//!   - services (unified service container)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! - **mcp**: MCP stdio adapter (depends on core)
//!   - server, tools, protocol
//!
//! # Example
//!
//! ```
//! use toolfinder::core::search::search;
//! use toolfinder::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let outcome = search(&catalog, "qr");
//! assert_eq!(outcome.suggestions[0].item.id, "qr-generator");
//! ```

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use core::catalog::Catalog;
pub use core::config::Config;
pub use core::error::{Result, ToolfinderError};
pub use core::services::Services;
pub use core::types::*;
