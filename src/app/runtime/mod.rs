use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Settings;
use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod event_loop;
pub mod init;

use background::{Channels, spawn_event_thread, spawn_loader};
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment switch that skips raw-mode terminal setup (used by smoke tests).
pub const HEADLESS_ENV: &str = "SHEETNAV_TEST_HEADLESS";

/// What: Run the sheetnav TUI end-to-end: initialize terminal and state, start the one-shot
/// sheet load, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (endpoint, debounce interval, icons, default category).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Load: one spawned task fetches and normalizes the sheet and reports once.
/// - Event loop: renders frames and handles keystrokes, the load outcome, and debounced
///   search deadlines.
/// - Cleanup: stops the input thread and restores terminal modes before returning.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::new(&settings);
    let mut channels = Channels::new();

    spawn_loader(
        app.endpoint.clone(),
        settings.default_category.clone(),
        channels.load_tx.clone(),
    );

    let event_thread_cancelled = Arc::new(AtomicBool::new(false));
    spawn_event_thread(headless, &channels.event_tx, &event_thread_cancelled);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    event_thread_cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
