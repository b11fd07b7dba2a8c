//! Event handling layer for the sheetnav TUI.
//!
//! Keystrokes either edit the search query (which arms the debounced search),
//! move the card selection, open the selected link, or quit.

use std::time::Instant;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::search::on_query_edited;
use crate::state::AppState;

/// Cards skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;

/// What: Apply a key that edits the query text.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Application state.
/// - `now`: Time of the keystroke.
///
/// Details:
/// - Keys that are not edits, and Backspace on an empty query, leave the search untouched.
fn handle_query_edit(ke: &KeyEvent, app: &mut AppState, now: Instant) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Char('u') if ctrl => app.input.clear(),
        KeyCode::Char(c) if !ctrl => app.input.push(c),
        KeyCode::Backspace => {
            if app.input.pop().is_none() {
                return;
            }
        }
        _ => return,
    }
    on_query_edited(app, now);
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState, now: Instant) -> bool {
    let CEvent::Key(ke) = ev else {
        // Resize and focus changes only need the redraw that follows every event.
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down | KeyCode::Tab => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_STEP),
        KeyCode::PageDown => app.move_selection(PAGE_STEP),
        KeyCode::Home => app.selected = 0,
        KeyCode::End => app.move_selection(isize::MAX),
        KeyCode::Enter => {
            if let Some(card) = app.selected_card() {
                tracing::info!(url = %card.url, "opening link");
                crate::util::open_url(&card.url);
            }
        }
        _ => handle_query_edit(ke, app, now),
    }
    false
}
