use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::index::Entry;
use crate::sources::LoadError;

use super::init::load_entries;

/// Outcome of the one-shot sheet load.
pub type LoadOutcome = Result<Vec<Entry>, LoadError>;

/// Channels connecting background producers to the event loop.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Load outcome sender, consumed by the loader task.
    pub load_tx: mpsc::UnboundedSender<LoadOutcome>,
    /// Load outcome receiver.
    pub load_rx: mpsc::UnboundedReceiver<LoadOutcome>,
}

impl Channels {
    /// Create the channel set.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (load_tx, load_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            load_tx,
            load_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

/// What: Spawn the one-shot loader task.
///
/// Inputs:
/// - `endpoint`: JSON endpoint URL.
/// - `default_category`: Label for rows without a category.
/// - `load_tx`: Channel receiving the single outcome.
///
/// Details:
/// - Exactly one attempt; the outcome is sent once and the task ends.
pub fn spawn_loader(
    endpoint: String,
    default_category: String,
    load_tx: mpsc::UnboundedSender<LoadOutcome>,
) {
    tokio::spawn(async move {
        let outcome = load_entries(&endpoint, &default_category).await;
        let _ = load_tx.send(outcome);
    });
}

/// What: Spawn event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `event_thread_cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Spawns a blocking thread that polls for terminal events
/// - Checks cancellation flag periodically to allow immediate exit
/// - Uses 50ms poll timeout to balance responsiveness and CPU usage
pub fn spawn_event_thread(
    headless: bool,
    event_tx: &mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: &Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    let event_tx_for_thread = event_tx.clone();
    let cancelled = Arc::clone(event_thread_cancelled);
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        // ignore transient read errors and continue
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) {
                        break;
                    }
                    // When receiver is dropped (on exit), send will fail
                    if event_tx_for_thread.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
