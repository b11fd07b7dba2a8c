//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// sheetnav - browse a spreadsheet of links as a searchable, grouped card grid
#[derive(Parser, Debug)]
#[command(name = "sheetnav")]
#[command(version)]
#[command(about = "Browse a spreadsheet of links as a searchable, grouped card grid", long_about = None)]
pub struct Args {
    /// Fetch rows from this URL instead of the composed sheet endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Spreadsheet identifier substituted into the endpoint template
    #[arg(long)]
    pub sheet_id: Option<String>,

    /// Worksheet (tab) name substituted into the endpoint template
    #[arg(long)]
    pub sheet_name: Option<String>,

    /// Write a standalone HTML page to PATH and exit (combine with --search to filter it)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print entries matching KEYWORD, grouped by category, and exit
    #[arg(short, long, value_name = "KEYWORD")]
    pub search: Option<String>,

    /// Print search matches as a JSON array instead of text (use with --search)
    #[arg(long)]
    pub json: bool,

    /// Do not derive favicon addresses for cards
    #[arg(long)]
    pub no_icons: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Overlay command-line values onto settings loaded from disk.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings from defaults and `settings.conf`; updated in place.
///
/// Output:
/// - None (side effect: flags that were given replace the file values).
///
/// Details:
/// - Blank string flags are ignored so `--sheet-id ""` cannot erase a configured id.
pub fn apply_overrides(args: &Args, settings: &mut Settings) {
    let given = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    };
    if let Some(endpoint) = given(&args.endpoint) {
        settings.endpoint = endpoint;
    }
    if let Some(id) = given(&args.sheet_id) {
        settings.sheet_id = id;
    }
    if let Some(name) = given(&args.sheet_name) {
        settings.sheet_name = name;
    }
    if args.no_icons {
        settings.show_icons = false;
    }
}
