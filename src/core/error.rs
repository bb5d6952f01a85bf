//! Error types and error handling for toolfinder.
//!
//! This module defines the error types used throughout the
//! application. Ranking itself never fails; errors come from
//! building a catalog, loading configuration, or looking up an
//! item that is not in the catalog. Protocol-specific error
//! handling (MCP error codes) lives in the adapter modules.

use thiserror::Error;

/// Result type alias for toolfinder operations
pub type Result<T> = std::result::Result<T, ToolfinderError>;

/// Main error type for toolfinder
#[derive(Error, Debug)]
pub enum ToolfinderError {
    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    #[error("Invalid catalog item: {0}")]
    InvalidItem(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ToolfinderError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ToolfinderError::ItemNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ToolfinderError::EmptyCatalog
                | ToolfinderError::DuplicateId(_)
                | ToolfinderError::InvalidItem(_)
                | ToolfinderError::CatalogError(_)
                | ToolfinderError::ConfigError(_)
        )
    }
}
