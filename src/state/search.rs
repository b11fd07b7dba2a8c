//! Keyword matching over resident entries.

use crate::index::Entry;

/// What: Canonicalize raw search input into the matching keyword.
///
/// Inputs:
/// - `raw`: Text as typed.
///
/// Output:
/// - Trimmed, lowercased keyword.
#[must_use]
pub fn normalize_keyword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// What: Test one entry against a normalized keyword.
///
/// Inputs:
/// - `entry`: Candidate entry.
/// - `keyword`: Output of [`normalize_keyword`].
///
/// Output:
/// - `true` when the keyword is empty or a substring of the entry's name, description, and tags.
#[must_use]
pub fn matches(entry: &Entry, keyword: &str) -> bool {
    keyword.is_empty() || entry.search_text().contains(keyword)
}

/// What: Derive the filtered view of `items` for a raw keyword.
///
/// Inputs:
/// - `items`: Full entry collection.
/// - `raw_keyword`: Search text, normalized here.
///
/// Output:
/// - Matching entries in their original order. An empty keyword returns all entries.
#[must_use]
pub fn filter_entries(items: &[Entry], raw_keyword: &str) -> Vec<Entry> {
    let keyword = normalize_keyword(raw_keyword);
    if keyword.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|e| matches(e, &keyword))
        .cloned()
        .collect()
}
