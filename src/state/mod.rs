//! Session state: loaded entries, the filtered view, and the runtime container.

pub mod app_state;
pub mod nav;
pub mod search;

pub use app_state::{AppState, LoadPhase};
pub use nav::NavState;
pub use search::{filter_entries, matches, normalize_keyword};
