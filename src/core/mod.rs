//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the adapters (CLI, MCP).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **catalog**: Validated tool catalog (built-in or from file)
//! - **search**: Keyword ranking and suggestion selection
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Result, ToolfinderError};
pub use services::Services;
