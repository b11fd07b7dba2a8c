use ratatui::Terminal;
use tokio::select;
use tokio::time::{Instant as TokioInstant, sleep_until};

use crate::app::search::run_due_search;
use crate::state::AppState;
use crate::ui::tui::draw;

use super::background::Channels;
use super::init::apply_load_outcome;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background producers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for a terminal event, the load outcome, or the pending search deadline,
///   whichever comes first
/// - The deadline branch only exists while a search is pending
/// - Timestamps come from the tokio clock so keystrokes and deadlines share one time source
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    let deadline = app.debouncer.deadline();
    let wake = deadline.map_or_else(TokioInstant::now, TokioInstant::from_std);
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, TokioInstant::now().into_std())
        }
        Some(outcome) = channels.load_rx.recv() => {
            apply_load_outcome(app, outcome);
            false
        }
        () = sleep_until(wake), if deadline.is_some() => {
            run_due_search(app, TokioInstant::now().into_std());
            false
        }
        else => false
    }
}

/// What: Run the main event loop, processing all channel messages and rendering the UI.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background producers
///
/// Output: None (runs until exit condition is met)
///
/// Details:
/// - Draws a frame before every wait, so each state change is painted once
/// - Exits when the event handler returns true (e.g., Esc)
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| draw(f, app));
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
