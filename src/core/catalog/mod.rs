//! Tool catalog: the fixed, ordered set of items eligible for search.
//!
//! A [`Catalog`] is validated once when it is built and is read-only
//! afterwards. Order is preserved because ranking ties fall back to
//! catalog order.

mod builtin;
mod loader;

use crate::core::error::{Result, ToolfinderError};
use crate::core::types::CatalogItem;
use std::collections::HashSet;

pub use builtin::builtin_items;

/// Validated, immutable catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, normalizing keywords and rejecting bad items
    ///
    /// Fails on an empty item list, an empty id or title, or a repeated id.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(ToolfinderError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(items.len());
        let mut normalized = Vec::with_capacity(items.len());

        for mut item in items {
            item.id = item.id.trim().to_string();
            if item.id.is_empty() {
                return Err(ToolfinderError::InvalidItem(
                    "Item id cannot be empty".to_string(),
                ));
            }
            if item.title.trim().is_empty() {
                return Err(ToolfinderError::InvalidItem(format!(
                    "Item '{}' has an empty title",
                    item.id
                )));
            }
            if !seen.insert(item.id.clone()) {
                return Err(ToolfinderError::DuplicateId(item.id));
            }

            item.keywords = normalize_keywords(&item.keywords);
            if item.keywords.is_empty() {
                tracing::warn!(
                    "Catalog item '{}' has no keywords; it can only match on title or description",
                    item.id
                );
            }

            normalized.push(item);
        }

        tracing::debug!("Catalog built with {} items", normalized.len());

        Ok(Self { items: normalized })
    }

    /// Catalog of the tools shipped with toolfinder
    pub fn builtin() -> Self {
        Self {
            items: builtin_items().to_vec(),
        }
    }

    /// Items in catalog order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an item by id, failing with `ItemNotFound`
    pub fn require(&self, id: &str) -> Result<&CatalogItem> {
        self.get(id)
            .ok_or_else(|| ToolfinderError::ItemNotFound(id.to_string()))
    }

    /// Ids in catalog order
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Trim and lowercase keywords, dropping empties and repeats
///
/// An empty keyword is a substring of every query, so it is never kept.
fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
