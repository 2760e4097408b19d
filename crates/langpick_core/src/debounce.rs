//! Clock-driven debounce primitive.
//!
//! The debouncer never spawns timers. Hosts pass the current [`Instant`] into
//! [`Debouncer::schedule`] and [`Debouncer::poll`], and can use
//! [`Debouncer::deadline`] to sleep until the pending value settles.

use std::time::{Duration, Instant};

/// Holds at most one pending value; a newer schedule replaces the older one.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace any pending value with `value`, restarting the quiet period at `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Drop the pending value, if any.
    ///
    /// # Returns
    /// The cancelled value.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value settles.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|(_, scheduled_at)| *scheduled_at + self.window)
    }

    /// Take the pending value once its quiet period has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline().is_some_and(|deadline| now >= deadline);
        if due {
            self.cancel()
        } else {
            None
        }
    }

    /// Take the pending value regardless of the quiet period.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}
