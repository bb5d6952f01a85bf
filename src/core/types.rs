//! Core data types for toolfinder.
//!
//! This module defines the catalog item, the per-query scored match
//! and the outcome returned by a search, plus the selection produced
//! when a suggestion is picked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single tool offered by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique, stable key (also the route segment)
    pub id: String,

    /// Display name
    pub title: String,

    /// One-line summary
    pub description: String,

    /// Lowercase tokens associated with the item
    ///
    /// Absent in a catalog file means no keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CatalogItem {
    /// Build an item from borrowed parts
    pub fn new(id: &str, title: &str, description: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Route the item is mounted at
    pub fn route(&self) -> String {
        format!("/{}", self.id)
    }
}

/// An item that matched a query, with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub item: CatalogItem,

    /// Additive relevance score (higher = more relevant)
    pub score: u32,
}

/// Result of evaluating one query against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Query as supplied by the caller
    pub query: String,

    /// Matching items, best first; empty for a blank query
    pub matches: Vec<ScoredMatch>,

    /// Ids of every item that should be shown
    pub visible_ids: BTreeSet<String>,

    /// Top matches for the quick-pick dropdown
    pub suggestions: Vec<ScoredMatch>,

    /// Number of items in the catalog
    pub total: usize,
}

impl SearchOutcome {
    /// Number of visible items
    pub fn visible_count(&self) -> usize {
        self.visible_ids.len()
    }

    /// Whether `id` should be shown
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_ids.contains(id)
    }

    /// True when the query was blank and nothing was ranked
    pub fn is_reset(&self) -> bool {
        crate::core::search::is_blank(&self.query)
    }
}

/// Outcome of picking a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: String,

    /// Text written back into the search field
    pub query: String,

    /// Route to navigate to
    pub route: String,
}
