//! Command-line search functionality.

use std::fmt::Write as _;

use crate::app::runtime::init::load_entries;
use crate::config::Settings;
use crate::index::{Entry, NoIcons};
use crate::state::filter_entries;
use crate::ui::{View, build_view};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Format matches as grouped plain text.
///
/// Inputs:
/// - `matches`: Filtered entries in source order.
///
/// Output:
/// - One `## category` heading per group followed by `name  url` lines with indented
///   description and tags; the "no results" notice when empty.
#[must_use]
pub fn format_matches(matches: &[Entry]) -> String {
    let mut out = String::new();
    match build_view(matches, &NoIcons) {
        View::Grid(sections) => {
            for (i, section) in sections.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "## {}", section.title);
                for card in &section.cards {
                    let _ = writeln!(out, "{}  {}", card.name, card.url);
                    if !card.desc.is_empty() {
                        let _ = writeln!(out, "    {}", card.desc);
                    }
                    if !card.tags.is_empty() {
                        let tags: Vec<String> = card.tags.iter().map(|t| format!("#{t}")).collect();
                        let _ = writeln!(out, "    {}", tags.join(" "));
                    }
                }
            }
        }
        View::Notice(notice) => {
            let _ = writeln!(out, "{}: {}", notice.title, notice.body);
        }
    }
    out
}

/// What: Fetch the sheet, filter it once, and print the matches to stdout.
///
/// Inputs:
/// - `settings`: Effective settings.
/// - `keyword`: Raw search text.
/// - `json`: Print a JSON array of entries instead of grouped text.
///
/// Output:
/// - `Ok(())` after printing.
///
/// # Errors
/// - The load error, or a serialization error in JSON mode.
pub async fn handle_search(settings: &Settings, keyword: &str, json: bool) -> Result<()> {
    let endpoint = settings.endpoint_url();
    tracing::info!(query = %keyword, endpoint = %endpoint, "search mode requested from CLI");
    let entries = load_entries(&endpoint, &settings.default_category).await?;
    let matches = filter_entries(&entries, keyword);
    tracing::info!(total = entries.len(), matched = matches.len(), "search complete");
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        print!("{}", format_matches(&matches));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, name: &str, desc: &str, tags: &[&str]) -> Entry {
        Entry {
            category: category.to_string(),
            name: name.to_string(),
            url: format!("https://{}.example/", name.to_lowercase()),
            desc: desc.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    /// What: Matches print grouped under sorted category headings.
    ///
    /// Inputs:
    /// - Entries in categories `b` and `A`.
    ///
    /// Output:
    /// - `A` section first; description and tags indented under their card.
    fn format_groups_matches() {
        let text = format_matches(&[
            entry("b", "Two", "", &[]),
            entry("A", "One", "first", &["x", "y"]),
        ]);
        assert_eq!(
            text,
            "## A\nOne  https://one.example/\n    first\n    #x #y\n\n## b\nTwo  https://two.example/\n"
        );
    }

    #[test]
    /// What: No matches prints the placeholder.
    ///
    /// Inputs:
    /// - Empty slice.
    ///
    /// Output:
    /// - The "No results" line.
    fn format_empty() {
        assert!(format_matches(&[]).starts_with("No results: "));
    }
}
