//! Configuration for the timing estimator.

use liftcheck_types::Seconds;

/// Configuration for a timing estimate.
#[derive(Clone, Debug)]
pub struct EstimatorConfig {
    /// Number of independent randomized trials.
    pub trials: usize,

    /// Travel time per floor before jitter.
    pub base_run_timespan: Seconds,

    /// Door service time before jitter.
    pub base_serve_timespan: Seconds,

    /// Upper bound of the uniform jitter added to the run timespan.
    pub run_jitter: Seconds,

    /// Upper bound of the uniform jitter added to the serve timespan.
    pub serve_jitter: Seconds,

    /// Release times are perturbed uniformly within `±release_jitter`.
    pub release_jitter: Seconds,

    /// Absolute slack added to the base time to form the max time.
    pub slack_seconds: Seconds,

    /// Relative slack applied to the base time to form the max time.
    pub slack_ratio: f64,

    /// Request sets whose base time reaches this are rejected.
    pub base_time_ceiling: Seconds,

    /// Random seed for deterministic estimates.
    pub seed: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            trials: 5000,
            base_run_timespan: 0.4,
            base_serve_timespan: 0.4,
            run_jitter: 0.04,
            serve_jitter: 0.04,
            release_jitter: 0.1,
            slack_seconds: 5.0,
            slack_ratio: 1.1,
            base_time_ceiling: 170.0,
            seed: 12345,
        }
    }
}

impl EstimatorConfig {
    /// Set the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Remove all randomness: every trial then yields the same time.
    pub fn without_jitter(mut self) -> Self {
        self.run_jitter = 0.0;
        self.serve_jitter = 0.0;
        self.release_jitter = 0.0;
        self
    }

    /// Set the ceiling above which a request set is rejected.
    pub fn with_base_time_ceiling(mut self, ceiling: Seconds) -> Self {
        self.base_time_ceiling = ceiling;
        self
    }
}
