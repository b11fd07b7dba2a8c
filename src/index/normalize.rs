//! Conversion of raw sheet rows into validated [`Entry`] values.

use serde_json::Value;
use url::Url;

use super::entry::Entry;
use crate::sources::RawRecord;

/// Base prepended to addresses that carry no recognized scheme.
const SECURE_BASE: &str = "https://";

/// Schemes a card may link to.
const WEB_SCHEMES: [&str; 2] = ["http", "https"];

/// What: Read a trimmed string field from a raw record.
///
/// Inputs:
/// - `record`: Raw key/value row.
/// - `key`: Column name.
///
/// Output:
/// - Trimmed text, or an empty string when the key is missing or not a string.
fn text_field<'a>(record: &'a RawRecord, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).map_or("", str::trim)
}

/// What: Split a delimited tag cell into tokens.
///
/// Inputs:
/// - `raw`: Tag cell content, separated by ASCII `,` or full-width `，`.
///
/// Output:
/// - Trimmed, non-empty tokens in source order.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split([',', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// What: Resolve a sheet cell into an absolute URL string.
///
/// Inputs:
/// - `raw`: Address as typed in the sheet.
///
/// Output:
/// - The serialized URL, or an empty string when the address cannot be resolved.
///
/// Details:
/// - Addresses with an `http`/`https` scheme (any case) are parsed as-is.
/// - Addresses with any other scheme (`mailto:`, `ftp://`, `javascript:`) are rejected.
/// - Anything else is resolved against `https://`, with leading slashes dropped so
///   protocol-relative `//host/path` values resolve to the same host. A resolved
///   address that picked up credentials from a stray `@` is rejected.
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let u = raw.trim();
    if u.is_empty() {
        return String::new();
    }
    let parsed = match explicit_scheme(u) {
        Some(scheme) if WEB_SCHEMES.iter().any(|w| scheme.eq_ignore_ascii_case(w)) => Url::parse(u),
        Some(_) => return String::new(),
        None => match Url::parse(&format!("{SECURE_BASE}{}", u.trim_start_matches('/'))) {
            Ok(url) if !url.username().is_empty() || url.password().is_some() => {
                return String::new();
            }
            other => other,
        },
    };
    match parsed {
        Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => url.into(),
        _ => String::new(),
    }
}

/// What: Find the scheme an address was written with.
///
/// Inputs:
/// - `u`: Trimmed address.
///
/// Output:
/// - The text before the first `:` when it is a valid scheme name, `None` otherwise.
///
/// Details:
/// - `host:8080/path` is a host with a port, not a scheme, so a colon followed only
///   by digits up to the path does not count.
fn explicit_scheme(u: &str) -> Option<&str> {
    let (scheme, rest) = u.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid {
        return None;
    }
    let port = &rest[..rest.find(['/', '?', '#']).unwrap_or(rest.len())];
    if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(scheme)
}

/// What: Normalize one raw row, returning `None` when it fails validation.
///
/// Inputs:
/// - `record`: Raw key/value row.
/// - `default_category`: Label used when the row's category is blank.
///
/// Output:
/// - `Some(Entry)` when both name and url are usable; `None` otherwise.
#[must_use]
pub fn normalize_record(record: &RawRecord, default_category: &str) -> Option<Entry> {
    let name = text_field(record, "name");
    let url = normalize_url(text_field(record, "url"));
    if name.is_empty() || url.is_empty() {
        return None;
    }
    let category = match text_field(record, "category") {
        "" => default_category.trim(),
        c => c,
    };
    let category = if category.is_empty() {
        super::entry::DEFAULT_CATEGORY
    } else {
        category
    };
    Some(Entry {
        category: category.to_string(),
        name: name.to_string(),
        url,
        desc: text_field(record, "desc").to_string(),
        tags: split_tags(text_field(record, "tags")),
    })
}

/// What: Normalize a fetched row sequence into the entry collection.
///
/// Inputs:
/// - `records`: Raw rows in source order.
/// - `default_category`: Label used for rows with a blank category.
///
/// Output:
/// - Valid entries in source order. Invalid rows are dropped without error.
#[must_use]
pub fn normalize(records: &[RawRecord], default_category: &str) -> Vec<Entry> {
    let entries: Vec<Entry> = records
        .iter()
        .filter_map(|r| normalize_record(r, default_category))
        .collect();
    let dropped = records.len() - entries.len();
    if dropped > 0 {
        tracing::debug!(kept = entries.len(), dropped, "normalized sheet rows");
    }
    entries
}
