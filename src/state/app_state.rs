//! Central `AppState` container owned by the runtime.

use crate::app::debounce::Debouncer;
use crate::config::Settings;
use crate::index::IconProvider;
use crate::state::nav::NavState;
use crate::ui::view::{Card, View, build_view};

/// Where the one-shot sheet load stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch in flight; input is recorded but nothing is filtered yet.
    Loading,
    /// Entries are resident and searchable.
    Ready,
    /// The load failed; the error card is the only content.
    Failed,
}

/// Application state shared by the event handlers, search controller, and renderer.
///
/// There is exactly one instance, owned by the runtime and passed by reference.
pub struct AppState {
    /// Loaded entries and the current filtered view.
    pub nav: NavState,
    /// Load progress.
    pub phase: LoadPhase,
    /// Current search input text.
    pub input: String,
    /// What the surface currently shows; replaced wholesale on every repaint.
    pub view: View,
    /// Index of the highlighted card in reading order.
    pub selected: usize,
    /// Pending keyword recompute.
    pub debouncer: Debouncer<String>,
    /// Icon lookup used when building cards.
    pub icons: Box<dyn IconProvider>,
    /// Endpoint being read, shown while loading.
    pub endpoint: String,
    /// Number of repaints performed, for diagnostics and tests.
    pub repaints: u64,
}

impl AppState {
    /// What: Create the pre-load state from settings.
    ///
    /// Inputs:
    /// - `settings`: Effective settings (endpoint, debounce interval, icons).
    ///
    /// Output:
    /// - State in `LoadPhase::Loading` showing the loading card.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let endpoint = settings.endpoint_url();
        Self {
            nav: NavState::default(),
            phase: LoadPhase::Loading,
            input: String::new(),
            view: View::loading(&endpoint),
            selected: 0,
            debouncer: Debouncer::new(settings.debounce()),
            icons: settings.icon_provider(),
            endpoint,
            repaints: 0,
        }
    }

    /// Replace the displayed content with a fresh projection of the filtered entries.
    pub fn repaint(&mut self) {
        self.view = build_view(self.nav.filtered(), self.icons.as_ref());
        self.repaints += 1;
        let count = self.view.card_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    /// What: Switch to the failure state.
    ///
    /// Inputs:
    /// - `message`: Text shown on the error card.
    ///
    /// Details:
    /// - Drops any pending search so nothing repaints over the error card.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Failed;
        self.debouncer.cancel();
        self.view = View::load_failed(message);
        self.selected = 0;
        self.repaints += 1;
    }

    /// Card under the selection highlight, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.view.card_at(self.selected)
    }

    /// What: Move the selection by `delta` cards, clamped to the view.
    ///
    /// Inputs:
    /// - `delta`: Signed step; negative moves up.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.view.card_count();
        if count == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(count - 1);
    }

    /// What: Summarize state for the status line.
    ///
    /// Output:
    /// - Human-readable status text.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.phase {
            LoadPhase::Loading => "Loading…".to_string(),
            LoadPhase::Failed => "Load failed · Esc to quit".to_string(),
            LoadPhase::Ready => format!(
                "{} of {} links · ↑/↓ select · Enter open · Esc quit",
                self.nav.filtered().len(),
                self.nav.items().len()
            ),
        }
    }
}
