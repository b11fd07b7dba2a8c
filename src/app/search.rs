//! Search controller: turns query edits into debounced filter recomputes.

use std::time::Instant;

use crate::state::{AppState, LoadPhase, normalize_keyword};

/// What: Record a query edit and (re)arm the debounce timer.
///
/// Inputs:
/// - `app`: Application state; `app.input` already holds the edited text.
/// - `now`: Time of the keystroke.
///
/// Details:
/// - The keyword is captured at keystroke time. Earlier pending keywords are superseded.
pub fn on_query_edited(app: &mut AppState, now: Instant) {
    let keyword = normalize_keyword(&app.input);
    app.debouncer.schedule(keyword, now);
}

/// What: Recompute the filtered view and repaint.
///
/// Inputs:
/// - `app`: Application state.
/// - `keyword`: Normalized keyword.
///
/// Details:
/// - Ignored unless entries are loaded, so the loading and error cards stay put.
pub fn apply_search(app: &mut AppState, keyword: &str) {
    if app.phase != LoadPhase::Ready {
        return;
    }
    app.nav.apply_keyword(keyword);
    app.selected = 0;
    app.repaint();
    tracing::debug!(
        keyword,
        matches = app.nav.filtered().len(),
        "search applied"
    );
}

/// What: Run the pending search if its quiet interval has elapsed.
///
/// Inputs:
/// - `app`: Application state.
/// - `now`: Current time.
///
/// Output:
/// - `true` when a recompute ran.
pub fn run_due_search(app: &mut AppState, now: Instant) -> bool {
    let Some(keyword) = app.debouncer.take_due(now) else {
        return false;
    };
    apply_search(app, &keyword);
    true
}
