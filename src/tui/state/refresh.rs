//! Auto-refresh timer.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Interval between automatic refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Decides, once per frame, whether an automatic refresh is due.
///
/// `last_attempt` is monotonic and drives the countdown; `last_data_update`
/// is wall-clock time shown in the summary band.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    enabled: bool,
    interval: Duration,
    last_attempt: Instant,
    last_data_update: DateTime<Local>,
}

impl RefreshScheduler {
    /// Creates a disabled scheduler whose countdown starts at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            enabled: false,
            interval: REFRESH_INTERVAL,
            last_attempt: now,
            last_data_update: Local::now(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_attempt(&self) -> Instant {
        self.last_attempt
    }

    pub fn last_data_update(&self) -> DateTime<Local> {
        self.last_data_update
    }

    /// True iff enabled and at least one interval has elapsed since the last attempt.
    pub fn should_auto_refresh(&self, now: Instant) -> bool {
        self.enabled && now.saturating_duration_since(self.last_attempt) >= self.interval
    }

    /// Records a refresh attempt, manual or automatic.
    pub fn mark_refreshed(&mut self, now: Instant) {
        self.last_attempt = now;
    }

    /// Records completion of a load, successful or empty.
    pub fn mark_data_updated(&mut self, at: DateTime<Local>) {
        self.last_data_update = at;
    }

    /// Flips auto-refresh and returns the new state.
    ///
    /// Turning it on restarts the countdown from `now`.
    pub fn toggle(&mut self, now: Instant) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.last_attempt = now;
        }
        self.enabled
    }

    /// Seconds left until the next automatic refresh; negative once overdue.
    pub fn seconds_until_next_refresh(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.last_attempt);
        self.interval.as_secs_f64() - elapsed.as_secs_f64()
    }
}
