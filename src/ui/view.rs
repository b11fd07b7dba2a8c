//! Presentation model: entries grouped into titled sections of cards.
//!
//! A [`View`] is what every surface paints. The HTML exporter and the terminal
//! renderer both start from the same value, so grouping, ordering, and the
//! empty/error states are decided once here.

use std::cmp::Ordering;
use std::collections::HashMap;

use deunicode::deunicode;

use crate::index::{Entry, IconProvider};

/// Heading of the placeholder shown when nothing matches.
pub const NO_RESULTS_TITLE: &str = "No results";
/// Body of the placeholder shown when nothing matches.
pub const NO_RESULTS_HINT: &str = "Try another keyword, or check the sheet data.";
/// Heading of the card shown when loading fails.
pub const LOAD_FAILED_TITLE: &str = "Load failed";
/// Heading of the card shown while the sheet is being fetched.
pub const LOADING_TITLE: &str = "Loading…";

/// One link card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Display name.
    pub name: String,
    /// Target URL.
    pub url: String,
    /// Icon image address, when one could be derived.
    pub icon: Option<String>,
    /// Description; empty when absent.
    pub desc: String,
    /// Tag badges in source order.
    pub tags: Vec<String>,
}

/// A titled group of cards sharing one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Category label.
    pub title: String,
    /// Cards in the order their entries were received.
    pub cards: Vec<Card>,
}

/// Why a single informational card replaces the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// The sheet is still being fetched.
    Loading,
    /// The filtered collection is empty.
    Empty,
    /// The initial load failed.
    Error,
}

/// A single informational card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// What the card reports.
    pub kind: NoticeKind,
    /// Bold heading.
    pub title: String,
    /// Message body.
    pub body: String,
}

/// Everything a surface needs to paint the page body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Grouped, sorted sections. Never empty.
    Grid(Vec<Section>),
    /// One informational or error card instead of the grid.
    Notice(Notice),
}

impl View {
    /// The "no results" placeholder.
    #[must_use]
    pub fn no_results() -> Self {
        Self::Notice(Notice {
            kind: NoticeKind::Empty,
            title: NO_RESULTS_TITLE.to_string(),
            body: NO_RESULTS_HINT.to_string(),
        })
    }

    /// Error card carrying `message`.
    #[must_use]
    pub fn load_failed(message: impl Into<String>) -> Self {
        Self::Notice(Notice {
            kind: NoticeKind::Error,
            title: LOAD_FAILED_TITLE.to_string(),
            body: message.into(),
        })
    }

    /// Card shown before the first load completes.
    #[must_use]
    pub fn loading(endpoint: &str) -> Self {
        Self::Notice(Notice {
            kind: NoticeKind::Loading,
            title: LOADING_TITLE.to_string(),
            body: endpoint.to_string(),
        })
    }

    /// Number of link cards in the view (zero for notices).
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Self::Grid(sections) => sections.iter().map(|s| s.cards.len()).sum(),
            Self::Notice(_) => 0,
        }
    }

    /// What: Look up a card by its position in reading order.
    ///
    /// Inputs:
    /// - `index`: Zero-based position across all sections.
    ///
    /// Output:
    /// - The card, or `None` when out of range or when the view is a notice.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        match self {
            Self::Grid(sections) => sections.iter().flat_map(|s| s.cards.iter()).nth(index),
            Self::Notice(_) => None,
        }
    }
}

/// What: Sort key approximating locale-aware collation.
///
/// Inputs:
/// - `label`: Category text.
///
/// Output:
/// - ASCII transliteration, lowercased, so accented and CJK labels sort next to their
///   Latin reading instead of after every ASCII label.
fn collation_key(label: &str) -> String {
    deunicode(label).to_lowercase()
}

/// What: Compare two category labels for display order.
///
/// Inputs:
/// - `a`, `b`: Category labels.
///
/// Output:
/// - Ordering by collation key, falling back to the raw text to keep the order total.
///
/// Details:
/// - The raw fallback is reversed so lowercase sorts before uppercase (`a` < `A`),
///   as locale collation does.
#[must_use]
pub fn compare_categories(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| b.cmp(a))
}

/// What: Partition entries by category, preserving entry order within each group.
///
/// Inputs:
/// - `entries`: Entries in display order.
///
/// Output:
/// - `(category, entries)` pairs sorted with [`compare_categories`].
#[must_use]
pub fn group_by_category(entries: &[Entry]) -> Vec<(&str, Vec<&Entry>)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Entry>)> = Vec::new();
    for entry in entries {
        let key = entry.category.as_str();
        if let Some(&i) = slots.get(key) {
            groups[i].1.push(entry);
        } else {
            slots.insert(key, groups.len());
            groups.push((key, vec![entry]));
        }
    }
    groups.sort_by(|a, b| compare_categories(a.0, b.0));
    groups
}

/// What: Build a card for one entry.
fn card(entry: &Entry, icons: &dyn IconProvider) -> Card {
    Card {
        name: entry.name.clone(),
        url: entry.url.clone(),
        icon: icons.icon_for(&entry.url),
        desc: entry.desc.clone(),
        tags: entry.tags.clone(),
    }
}

/// What: Project an entry collection into the view every surface paints.
///
/// Inputs:
/// - `entries`: Filtered entries in source order.
/// - `icons`: Icon lookup used for card icons.
///
/// Output:
/// - `View::Grid` with one section per category, or the "no results" notice when empty.
#[must_use]
pub fn build_view(entries: &[Entry], icons: &dyn IconProvider) -> View {
    if entries.is_empty() {
        return View::no_results();
    }
    let sections = group_by_category(entries)
        .into_iter()
        .map(|(title, group)| Section {
            title: title.to_string(),
            cards: group.into_iter().map(|e| card(e, icons)).collect(),
        })
        .collect();
    View::Grid(sections)
}
