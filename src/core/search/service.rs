//! Search service shared by the adapters.
//!
//! Thin wrapper over [`search`](super::search) that owns the catalog
//! handle and the query length limit. It holds no per-query state.

use super::query::truncate_query;
use super::ranker;
use super::select;
use crate::core::catalog::Catalog;
use crate::core::error::Result;
use crate::core::types::{SearchOutcome, Selection};
use std::sync::Arc;
use std::time::Instant;

/// Catalog search service
pub struct SearchService {
    catalog: Arc<Catalog>,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(catalog: Arc<Catalog>, max_query_length: usize) -> Self {
        Self {
            catalog,
            max_query_length,
        }
    }

    /// Evaluate a query, trimming and truncating it to the configured length first
    pub fn search(&self, query: &str) -> SearchOutcome {
        let start = Instant::now();

        let query = truncate_query(query.trim(), self.max_query_length);
        let outcome = ranker::search(&self.catalog, query);

        tracing::debug!(
            "Query {:?}: {} of {} visible, {} suggestion(s) in {}us",
            query,
            outcome.visible_count(),
            outcome.total,
            outcome.suggestions.len(),
            start.elapsed().as_micros()
        );

        outcome
    }

    /// Select an item by id
    pub fn select(&self, id: &str) -> Result<Selection> {
        select::select(&self.catalog, id)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
