//! User settings: defaults, the `settings.conf` parser, and config/log paths.

mod parse;
mod paths;
mod skeleton;

use std::path::Path;
use std::time::Duration;

use crate::index::{DEFAULT_CATEGORY, FaviconService, IconProvider, NoIcons, icon::DEFAULT_ICON_SIZE};
use crate::sources::{DEFAULT_ENDPOINT_TEMPLATE, compose_endpoint};

pub use parse::parse_settings;
pub use paths::{config_dir, logs_dir, resolve_settings_config_path};
pub use skeleton::{SETTINGS_SKELETON_CONTENT, ensure_settings_file};

/// Spreadsheet the navigation page reads when nothing else is configured.
pub const DEFAULT_SHEET_ID: &str = "1Iqsg-RPs0zxd6ZZ6wV3h4-J5_4BZcQb9o8EOtHHJh3o";
/// Worksheet read when nothing else is configured.
pub const DEFAULT_SHEET_NAME: &str = "nav";
/// Quiet interval between the last keystroke and the filter recompute.
pub const DEFAULT_DEBOUNCE_MS: u64 = 120;

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Spreadsheet identifier substituted for `{sheet_id}`.
    pub sheet_id: String,
    /// Worksheet name substituted (percent-encoded) for `{sheet_name}`.
    pub sheet_name: String,
    /// Endpoint URL template.
    pub endpoint_template: String,
    /// Explicit endpoint; overrides composition when non-empty.
    pub endpoint: String,
    /// Section title for rows without a category.
    pub default_category: String,
    /// Debounce quiet interval in milliseconds.
    pub search_debounce_ms: u64,
    /// Whether exported pages request favicons.
    pub show_icons: bool,
    /// Favicon size requested from the icon service.
    pub icon_size: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            endpoint_template: DEFAULT_ENDPOINT_TEMPLATE.to_string(),
            endpoint: String::new(),
            default_category: DEFAULT_CATEGORY.to_string(),
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            show_icons: true,
            icon_size: DEFAULT_ICON_SIZE,
        }
    }
}

impl Settings {
    /// What: Resolve the URL the loader should fetch.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - The explicit `endpoint` when set, otherwise the composed template.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        let explicit = self.endpoint.trim();
        if explicit.is_empty() {
            compose_endpoint(&self.endpoint_template, &self.sheet_id, &self.sheet_name)
        } else {
            explicit.to_string()
        }
    }

    /// Debounce quiet interval as a `Duration`.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// What: Build the icon provider selected by these settings.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - `FaviconService` with the configured size, or `NoIcons` when icons are off.
    #[must_use]
    pub fn icon_provider(&self) -> Box<dyn IconProvider> {
        if self.show_icons {
            Box::new(FaviconService {
                size: self.icon_size,
            })
        } else {
            Box::new(NoIcons)
        }
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file to read.
///
/// Output:
/// - Defaults overlaid with the file's values; plain defaults when the file is unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match std::fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut settings),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read settings; using defaults");
        }
    }
    settings
}

/// What: Load the user's settings, creating the skeleton file on first run.
///
/// Inputs: None
///
/// Output:
/// - Effective settings (file values over defaults).
#[must_use]
pub fn load_settings() -> Settings {
    let path = resolve_settings_config_path().unwrap_or_else(|| config_dir().join("settings.conf"));
    ensure_settings_file(&path);
    let settings = load_settings_from(&path);
    tracing::debug!(path = %path.display(), endpoint = %settings.endpoint_url(), "settings loaded");
    settings
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
