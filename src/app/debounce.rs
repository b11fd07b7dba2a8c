//! Cancellable single-slot timer used to coalesce bursts of input.

use std::time::{Duration, Instant};

/// A scheduled value waiting for its quiet interval to elapse.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending<T> {
    /// Earliest instant at which the value may be released.
    due: Instant,
    /// Value released once due.
    value: T,
}

/// What: Deferred single-slot timer.
///
/// Details:
/// - `schedule` replaces whatever was pending; only the most recent value is ever released.
/// - The debouncer owns no thread or task. Callers wait for [`Debouncer::deadline`] themselves
///   and then call [`Debouncer::take_due`].
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    /// Quiet interval between the last schedule and release.
    interval: Duration,
    /// Current pending value, if any.
    pending: Option<Pending<T>>,
    /// Number of `schedule` calls so far.
    generation: u64,
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer with the given quiet interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            generation: 0,
        }
    }

    /// Quiet interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// What: Schedule `value`, superseding any pending value.
    ///
    /// Inputs:
    /// - `value`: Value to release once quiet.
    /// - `now`: Time of the triggering input.
    ///
    /// Output:
    /// - Generation number of this schedule.
    pub fn schedule(&mut self, value: T, now: Instant) -> u64 {
        self.generation += 1;
        self.pending = Some(Pending {
            due: now + self.interval,
            value,
        });
        self.generation
    }

    /// Drop the pending value. Returns `true` when something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a value is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// What: Release the pending value if its quiet interval has elapsed.
    ///
    /// Inputs:
    /// - `now`: Current time.
    ///
    /// Output:
    /// - `Some(value)` exactly once per surviving schedule; `None` when idle or not yet due.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }
}
