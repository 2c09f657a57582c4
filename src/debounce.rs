//! Trailing-edge debouncing for values edited every frame.
//!
//! The UI pushes the raw value each frame; the settled value only follows it
//! once the raw value has stayed unchanged for the configured delay. Any new
//! value restarts the wait. There is no leading edge and no maximum wait.

use std::time::{Duration, Instant};

/// A value that settles after it stops changing
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    settled: T,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            settled: initial,
            pending: None,
        }
    }

    /// The current settled value
    pub fn value(&self) -> &T {
        &self.settled
    }

    /// Offer the latest raw value observed at `now`.
    ///
    /// Restarts the wait when `value` differs from the pending one. Pushing
    /// the already-settled value with nothing pending is a no-op, and pushing
    /// it while something else is pending cancels that pending change.
    pub fn push(&mut self, value: T, now: Instant) {
        match &self.pending {
            Some((pending, _)) if *pending == value => {}
            _ if value == self.settled => self.pending = None,
            _ => self.pending = Some((value, now + self.delay)),
        }
    }

    /// Settle the pending value if its deadline has passed.
    ///
    /// Returns true when the settled value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                if let Some((value, _)) = self.pending.take() {
                    self.settled = value;
                }
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending value settles, if one is pending
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without settling it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Settle `value` immediately, discarding anything pending
    pub fn settle_now(&mut self, value: T) {
        self.cancel();
        self.settled = value;
    }
}
