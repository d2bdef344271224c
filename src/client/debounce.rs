//! Cancellable delayed-commit primitive.
//!
//! Collapses a burst of updates into one: every new input re-arms the
//! deadline, and only a full quiet period lets the pending commit fire.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer. A pending deadline is replaced, so only
    /// the last arm before a full quiet period leads to a fire.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the armed deadline has passed,
    /// disarming the timer.
    pub fn fire_ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Remaining time until the pending deadline, if any.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
