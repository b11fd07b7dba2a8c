use crate::index::Entry;
use crate::state::search::filter_entries;

/// Loaded entries and the currently visible subset.
///
/// `items` is fixed at construction; `filtered` is replaced wholesale on every search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Every normalized entry, in source order.
    items: Vec<Entry>,
    /// Entries matching the active keyword, in source order.
    filtered: Vec<Entry>,
}

impl NavState {
    /// What: Create state from the normalized load result.
    ///
    /// Inputs:
    /// - `items`: Entries in source order.
    ///
    /// Output:
    /// - State whose filtered view equals `items`.
    #[must_use]
    pub fn new(items: Vec<Entry>) -> Self {
        let filtered = items.clone();
        Self { items, filtered }
    }

    /// Full entry collection.
    #[must_use]
    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    /// Entries matching the active keyword.
    #[must_use]
    pub fn filtered(&self) -> &[Entry] {
        &self.filtered
    }

    /// Recompute the filtered view for `raw_keyword`.
    pub fn apply_keyword(&mut self, raw_keyword: &str) {
        self.filtered = filter_entries(&self.items, raw_keyword);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Filtering replaces the view without touching the full collection.
    ///
    /// Inputs:
    /// - Two entries, a narrowing keyword, then an empty keyword.
    ///
    /// Output:
    /// - One filtered entry, then both again; `items` unchanged throughout.
    fn apply_keyword_rederives_view() {
        let mk = |name: &str| Entry {
            category: "c".to_string(),
            name: name.to_string(),
            url: format!("https://{name}.example/"),
            desc: String::new(),
            tags: Vec::new(),
        };
        let mut nav = NavState::new(vec![mk("alpha"), mk("beta")]);
        assert_eq!(nav.filtered(), nav.items());
        nav.apply_keyword("ALP");
        assert_eq!(nav.filtered().len(), 1);
        assert_eq!(nav.items().len(), 2);
        nav.apply_keyword("");
        assert_eq!(nav.filtered(), nav.items());
    }
}
