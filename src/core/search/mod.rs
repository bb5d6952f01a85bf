//! Search module for ranking catalog items against a free-text query.
//!
//! The ranking itself is a pure function of `(catalog, query)`;
//! [`SearchService`] only adds query truncation and logging.

mod query;
mod ranker;
mod select;
mod service;

pub use query::{is_blank, normalize_query, truncate_query};
pub use ranker::{
    score_item, search, PredicateHits, DESCRIPTION_WEIGHT, KEYWORD_WEIGHT, SUGGESTION_LIMIT,
    TITLE_WEIGHT,
};
pub use select::select;
pub use service::SearchService;
