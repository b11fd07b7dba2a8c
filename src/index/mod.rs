//! Validated link entries: the data model, the row normalizer, and icon lookup.

pub mod entry;
pub mod icon;
pub mod normalize;

pub use entry::{DEFAULT_CATEGORY, Entry};
pub use icon::{FaviconService, IconProvider, NoIcons};
pub use normalize::{normalize, normalize_record, normalize_url, split_tags};
