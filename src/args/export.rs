//! One-shot HTML export.

use std::path::Path;

use crate::app::runtime::init::load_entries;
use crate::config::Settings;
use crate::index::{Entry, IconProvider};
use crate::sources::LoadError;
use crate::state::filter_entries;
use crate::ui::{View, build_view, render_page};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Render the exported page for a load outcome.
///
/// Inputs:
/// - `outcome`: Loaded entries or the load error.
/// - `keyword`: Optional filter applied before rendering.
/// - `icons`: Icon lookup for cards.
/// - `title`: Page title.
///
/// Output:
/// - Complete HTML document; a failed load yields a page holding only the error card.
#[must_use]
pub fn export_page(
    outcome: &std::result::Result<Vec<Entry>, LoadError>,
    keyword: &str,
    icons: &dyn IconProvider,
    title: &str,
) -> String {
    let view = match outcome {
        Ok(entries) => build_view(&filter_entries(entries, keyword), icons),
        Err(err) => View::load_failed(err.to_string()),
    };
    render_page(&view, title, keyword)
}

/// What: Fetch the sheet, render it as a standalone page, and write it to `path`.
///
/// Inputs:
/// - `settings`: Effective settings.
/// - `path`: Output file.
/// - `keyword`: Optional filter from `--search`.
///
/// Output:
/// - `Ok(())` once a page built from loaded entries is written.
///
/// # Errors
/// - The load error after writing the error page, or the I/O error when the file cannot be written.
pub async fn handle_export(settings: &Settings, path: &Path, keyword: Option<&str>) -> Result<()> {
    let endpoint = settings.endpoint_url();
    tracing::info!(endpoint = %endpoint, path = %path.display(), "export requested from CLI");
    let outcome = load_entries(&endpoint, &settings.default_category).await;
    let icons = settings.icon_provider();
    let html = export_page(
        &outcome,
        keyword.unwrap_or_default(),
        icons.as_ref(),
        &settings.sheet_name,
    );
    std::fs::write(path, html)?;
    match outcome {
        Ok(entries) => {
            tracing::info!(entries = entries.len(), path = %path.display(), "page written");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "export wrote the error page");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::NoIcons;

    fn entry(category: &str, name: &str, desc: &str) -> Entry {
        Entry {
            category: category.to_string(),
            name: name.to_string(),
            url: format!("https://{}.example/", name.to_lowercase()),
            desc: desc.to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    /// What: The keyword filters exported cards.
    ///
    /// Inputs:
    /// - Two entries, keyword `sky`.
    ///
    /// Output:
    /// - Only the matching card and a one-link meta line.
    fn export_filters_by_keyword() {
        let outcome = Ok(vec![
            entry("Life", "Weather", "sky forecast"),
            entry("Life", "Map", "streets"),
        ]);
        let html = export_page(&outcome, "sky", &NoIcons, "nav");
        assert!(html.contains("Weather"));
        assert!(!html.contains(">Map<"));
        assert!(html.contains("1 links matching"));
        assert!(html.starts_with("<!doctype html>"));
    }

    #[test]
    /// What: A failed load exports a page with just the error card.
    ///
    /// Inputs:
    /// - `Fetch { status: 500 }`.
    ///
    /// Output:
    /// - Error card carrying the status message and no grid.
    fn export_failed_load() {
        let outcome = Err(LoadError::Fetch { status: 500 });
        let html = export_page(&outcome, "", &NoIcons, "nav");
        assert!(html.contains("failed to fetch data: 500"));
        assert!(html.contains("class=\"card error\""));
        assert!(!html.contains("class=\"grid\""));
    }
}
