use serde::Serialize;

/// Category label assigned to entries whose source row leaves it blank.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// One validated, navigable link.
///
/// Values of this type are only produced by [`crate::index::normalize`], which
/// guarantees a non-empty `name`, a non-empty absolute `url`, and a non-empty
/// `category`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Grouping label shown as a section title.
    pub category: String,
    /// Display text of the card.
    pub name: String,
    /// Serialized absolute URL.
    pub url: String,
    /// Free text description; empty when the source row has none.
    pub desc: String,
    /// Tag tokens in source order.
    pub tags: Vec<String>,
}

impl Entry {
    /// What: Build the lowercase haystack used by keyword matching.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - `name`, `desc`, and the space-joined tags separated by single spaces, lowercased.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.desc, self.tags.join(" ")).to_lowercase()
    }
}
