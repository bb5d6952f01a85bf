//! Keyword ranking over the catalog.
//!
//! Every item is tested against three predicates (title, description,
//! keyword). Any hit makes the item visible and each hit adds a fixed
//! weight to its score. Matches are ordered by score with ties left in
//! catalog order.

use super::query::normalize_query;
use crate::core::catalog::Catalog;
use crate::core::types::{CatalogItem, ScoredMatch, SearchOutcome};

/// Weight of a title hit
pub const TITLE_WEIGHT: u32 = 10;

/// Weight of a description hit
pub const DESCRIPTION_WEIGHT: u32 = 5;

/// Weight of a keyword hit
pub const KEYWORD_WEIGHT: u32 = 3;

/// Maximum number of suggestions
pub const SUGGESTION_LIMIT: usize = 5;

/// Which predicates an item satisfied for a normalized query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredicateHits {
    pub title: bool,
    pub description: bool,
    pub keyword: bool,
}

impl PredicateHits {
    /// Evaluate all predicates; `query` must already be normalized
    pub fn evaluate(item: &CatalogItem, query: &str) -> Self {
        Self {
            title: item.title.to_lowercase().contains(query),
            description: item.description.to_lowercase().contains(query),
            keyword: keyword_match(&item.keywords, query),
        }
    }

    pub fn any(&self) -> bool {
        self.title || self.description || self.keyword
    }

    /// Additive score of the satisfied predicates
    pub fn score(&self) -> u32 {
        let mut score = 0;
        if self.title {
            score += TITLE_WEIGHT;
        }
        if self.description {
            score += DESCRIPTION_WEIGHT;
        }
        if self.keyword {
            score += KEYWORD_WEIGHT;
        }
        score
    }
}

/// Bidirectional substring test against every keyword.
///
/// A keyword matches when it contains the query (partial typing) or the
/// query contains it (over-specified query). The second direction also
/// lets short keywords match unrelated long queries; that behavior is
/// kept as is.
fn keyword_match(keywords: &[String], query: &str) -> bool {
    keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        keyword.contains(query) || query.contains(keyword.as_str())
    })
}

/// Score a single item; `None` when nothing matched
pub fn score_item(item: &CatalogItem, query: &str) -> Option<u32> {
    let hits = PredicateHits::evaluate(item, query);
    hits.any().then(|| hits.score())
}

/// Evaluate a query against the catalog.
///
/// A blank query makes every item visible with no matches and no
/// suggestions. Otherwise matches are sorted by descending score; the
/// sort is stable so equal scores keep catalog order. The same inputs
/// always produce the same outcome.
pub fn search(catalog: &Catalog, query: &str) -> SearchOutcome {
    let total = catalog.len();

    let Some(normalized) = normalize_query(query) else {
        return SearchOutcome {
            query: query.to_string(),
            matches: Vec::new(),
            visible_ids: catalog.iter().map(|item| item.id.clone()).collect(),
            suggestions: Vec::new(),
            total,
        };
    };

    let mut matches: Vec<ScoredMatch> = catalog
        .iter()
        .filter_map(|item| {
            score_item(item, &normalized).map(|score| ScoredMatch {
                item: item.clone(),
                score,
            })
        })
        .collect();

    // slice::sort_by is stable
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    let visible_ids = matches.iter().map(|m| m.item.id.clone()).collect();
    let suggestions = matches.iter().take(SUGGESTION_LIMIT).cloned().collect();

    SearchOutcome {
        query: query.to_string(),
        matches,
        visible_ids,
        suggestions,
        total,
    }
}
