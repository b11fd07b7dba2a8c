use crate::index::{Entry, normalize};
use crate::sources::{LoadError, fetch_records};
use crate::state::{AppState, LoadPhase, NavState, normalize_keyword};

/// What: Fetch and normalize the sheet.
///
/// Inputs:
/// - `endpoint`: JSON endpoint URL.
/// - `default_category`: Label for rows without a category.
///
/// Output:
/// - Normalized entries in source order.
///
/// # Errors
/// - Any `LoadError` from the fetch; normalization itself cannot fail.
pub async fn load_entries(endpoint: &str, default_category: &str) -> Result<Vec<Entry>, LoadError> {
    let rows = fetch_records(endpoint).await?;
    Ok(normalize(&rows, default_category))
}

/// What: Install the load outcome into application state.
///
/// Inputs:
/// - `app`: Application state, still in `LoadPhase::Loading`.
/// - `outcome`: Result of [`load_entries`].
///
/// Output:
/// - None (side effect: state becomes `Ready` with the grid painted, or `Failed` with the error card).
///
/// Details:
/// - Text typed while loading is applied immediately, so the first grid already matches the input.
/// - Failures are logged here; nothing is retried.
pub fn apply_load_outcome(app: &mut AppState, outcome: Result<Vec<Entry>, LoadError>) {
    match outcome {
        Ok(entries) => {
            tracing::info!(entries = entries.len(), "sheet loaded");
            app.nav = NavState::new(entries);
            app.phase = LoadPhase::Ready;
            app.debouncer.cancel();
            let keyword = normalize_keyword(&app.input);
            if !keyword.is_empty() {
                app.nav.apply_keyword(&keyword);
            }
            app.selected = 0;
            app.repaint();
        }
        Err(err) => {
            tracing::error!(error = %err, endpoint = %app.endpoint, "failed to load sheet");
            app.show_error(err.to_string());
        }
    }
}
