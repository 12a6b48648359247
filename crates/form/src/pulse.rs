use std::time::{Duration, Instant};

/// How long the price display stays highlighted after an update.
pub const PULSE_DURATION: Duration = Duration::from_millis(300);

/// A transient highlight that fades [`PULSE_DURATION`] after being triggered.
///
/// Time is always passed in, so the same pulse can be driven by a real clock
/// or by fixed instants in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pulse {
    started: Option<Instant>,
}

impl Pulse {
    /// Starts (or restarts) the pulse at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Returns `true` while the pulse is still showing at `now`.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Returns how long the pulse keeps showing after `now`, if at all.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.started?);
        PULSE_DURATION
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }
}
