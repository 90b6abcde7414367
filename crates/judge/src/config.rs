//! Judge configuration.

use liftcheck_dataset::ValidatorConfig;
use liftcheck_estimator::EstimatorConfig;
use liftcheck_replay::ReplayConfig;
use liftcheck_types::{Building, Seconds};

/// Everything a judge run depends on besides its two inputs.
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Legal floors for requests and trace events.
    pub building: Building,

    /// Request set limits.
    pub validator: ValidatorConfig,

    /// Time bound estimation.
    pub estimator: EstimatorConfig,

    /// Trace timing rules.
    pub replay: ReplayConfig,

    /// Completion time allowed when the estimated bound is not enforced.
    pub absolute_time_limit: Seconds,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            building: Building::default(),
            validator: ValidatorConfig::default(),
            estimator: EstimatorConfig::default(),
            replay: ReplayConfig::default(),
            absolute_time_limit: 200.0,
        }
    }
}

impl JudgeConfig {
    /// Set the number of estimator trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.estimator = self.estimator.with_trials(trials);
        self
    }

    /// Set the estimator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.estimator = self.estimator.with_seed(seed);
        self
    }
}
