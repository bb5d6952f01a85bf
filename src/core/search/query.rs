//! Query normalization.
//!
//! Queries arrive on every keystroke and are never rejected. A blank
//! query means "reset": show everything and rank nothing.

/// Normalize a query for matching.
///
/// Returns `None` for an empty or whitespace-only query, otherwise the
/// trimmed, lowercased text.
///
/// # Examples
///
/// ```
/// use toolfinder::core::search::normalize_query;
///
/// assert_eq!(normalize_query("  PDF  "), Some("pdf".to_string()));
/// assert_eq!(normalize_query("   "), None);
/// ```
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Whether a query resets the view
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Cut a query down to at most `max_chars` characters.
///
/// Character based, so multi-byte input never splits.
///
/// # Examples
///
/// ```
/// use toolfinder::core::search::truncate_query;
///
/// assert_eq!(truncate_query("converter", 7), "convert");
/// assert_eq!(truncate_query("pdf", 10), "pdf");
/// ```
pub fn truncate_query(query: &str, max_chars: usize) -> &str {
    match query.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &query[..byte_idx],
        None => query,
    }
}
