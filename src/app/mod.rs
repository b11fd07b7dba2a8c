//! sheetnav application module: the terminal runtime and the search controller.

/// Cancellable single-slot timer for debounced search.
pub mod debounce;
/// Runtime event loop, loader task, and input thread.
pub mod runtime;
/// Search controller driven by query edits.
pub mod search;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{HEADLESS_ENV, run};
