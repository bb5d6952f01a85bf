//! Catalog file loading (TOML or JSON).
//!
//! TOML catalogs use `[[items]]` tables. JSON catalogs are either a bare
//! array of items or an object with an `items` array.

use super::Catalog;
use crate::core::error::{Result, ToolfinderError};
use crate::core::types::CatalogItem;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogItem>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<CatalogItem>),
    Wrapped(CatalogFile),
}

impl Catalog {
    /// Load a catalog from a file, choosing the format by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ToolfinderError::CatalogError(format!(
                "Failed to read catalog file {}: {e}",
                path.display()
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::info!("Loading catalog from {:?}", path);

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Parse a TOML catalog
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.items)
    }

    /// Parse a JSON catalog
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let items = match serde_json::from_str::<JsonCatalog>(contents)? {
            JsonCatalog::Bare(items) => items,
            JsonCatalog::Wrapped(file) => file.items,
        };
        Self::new(items)
    }
}
