//! Timing rules a replayed trace must satisfy.

use liftcheck_types::Seconds;

/// Minimum durations for elevator motion and door service.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    /// Minimum time to travel one floor.
    pub run_timespan: Seconds,

    /// Minimum time the doors stay open.
    pub serve_timespan: Seconds,

    /// Tolerance applied to every timing comparison.
    pub epsilon: Seconds,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            run_timespan: 0.4,
            serve_timespan: 0.5,
            epsilon: 1e-8,
        }
    }
}

impl ReplayConfig {
    /// Whether `elapsed` covers `required`, within tolerance.
    pub(crate) fn covers(&self, elapsed: Seconds, required: Seconds) -> bool {
        elapsed >= required - self.epsilon
    }
}
