//! Reduction of many randomized trials into judging thresholds.

use crate::config::EstimatorConfig;
use crate::error::EstimateError;
use crate::trial::{run_trial, TrialPlan, TrialRequest};
use liftcheck_types::{Building, Floor, PassengerRequest, Seconds};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

/// Pass/fail time thresholds for one request set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBounds {
    /// Worst observed completion time over all trials, rounded up.
    pub base_time: Seconds,
    /// Time a candidate is allowed to take.
    pub max_time: Seconds,
}

/// Estimates how long a correct controller may need for a request set.
#[derive(Debug, Clone)]
pub struct TimingEstimator {
    building: Building,
    config: EstimatorConfig,
}

impl TimingEstimator {
    /// Create an estimator for the given building.
    pub fn new(building: Building, config: EstimatorConfig) -> Self {
        Self { building, config }
    }

    /// Compute the time bounds for a validated request set.
    ///
    /// Fails if the base time reaches the configured ceiling.
    pub fn estimate(&self, requests: &[PassengerRequest]) -> Result<TimeBounds, EstimateError> {
        let worst = self.worst_case(requests)?;
        let base_time = worst.ceil();
        let max_time = (base_time + self.config.slack_seconds)
            .max(self.config.slack_ratio * base_time)
            .ceil();

        info!(
            requests = requests.len(),
            trials = self.config.trials,
            seed = self.config.seed,
            base_time,
            max_time,
            "Estimated time bounds"
        );

        if base_time >= self.config.base_time_ceiling {
            return Err(EstimateError::TooSlow {
                base_time,
                ceiling: self.config.base_time_ceiling,
            });
        }

        Ok(TimeBounds {
            base_time,
            max_time,
        })
    }

    /// Worst completion time over all trials, before rounding.
    ///
    /// Each trial reports the slowest of its request prefixes, so appending a
    /// request never lowers the result for a fixed seed and trial count.
    pub fn worst_case(&self, requests: &[PassengerRequest]) -> Result<Seconds, EstimateError> {
        let planned = requests
            .iter()
            .map(|request| self.place(request))
            .collect::<Result<Vec<_>, _>>()?;
        let ground = self
            .building
            .coordinate(Floor::GROUND)
            .ok_or_else(|| EstimateError::UnknownFloor {
                floor: Floor::GROUND,
                line: String::new(),
            })?;
        let plan = TrialPlan {
            requests: &planned,
            floors: self.building.coordinate_count(),
            ground,
        };

        let worst = (0..self.config.trials.max(1))
            .into_par_iter()
            .map(|trial| {
                let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
                rng.set_stream(trial as u64);
                run_trial(&plan, &self.config, &mut rng)
            })
            .reduce(|| 0.0, f64::max);

        debug!(worst, "Trials complete");
        Ok(worst)
    }

    fn place(&self, request: &PassengerRequest) -> Result<TrialRequest, EstimateError> {
        let coordinate = |floor: Floor| {
            self.building
                .coordinate(floor)
                .ok_or_else(|| EstimateError::UnknownFloor {
                    floor,
                    line: request.raw.clone(),
                })
        };
        Ok(TrialRequest {
            release_time: request.release_time,
            start: coordinate(request.start)?,
            end: coordinate(request.target)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftcheck_types::PassengerId;
    use rand::Rng;
    use tracing_test::traced_test;

    fn request(pid: u64, time: Seconds, start: i32, target: i32) -> PassengerRequest {
        PassengerRequest::new(PassengerId(pid), time, Floor(start), Floor(target))
    }

    fn estimator(trials: usize) -> TimingEstimator {
        TimingEstimator::new(
            Building::default(),
            EstimatorConfig::default().with_trials(trials),
        )
    }

    #[test]
    #[traced_test]
    fn test_single_request_bounds() {
        // Completion lies in [2.4, 2.74] for any jitter draw.
        let bounds = estimator(500).estimate(&[request(1, 0.0, 1, 5)]).unwrap();
        assert_eq!(bounds.base_time, 3.0);
        assert_eq!(bounds.max_time, 8.0);
        assert!(logs_contain("Estimated time bounds"));
    }

    #[test]
    fn test_relative_slack_dominates_for_long_sets() {
        let requests: Vec<_> = (0..5)
            .map(|i| request(i, i as f64 * 10.0, -3, 16))
            .collect();
        let bounds = estimator(200).estimate(&requests).unwrap();
        assert!(bounds.base_time > 50.0);
        assert_eq!(bounds.max_time, (bounds.base_time * 1.1).ceil());
    }

    #[test]
    fn test_estimate_is_deterministic_for_a_seed() {
        let requests = vec![
            request(1, 0.0, 1, 5),
            request(2, 0.3, -2, 9),
            request(3, 1.1, 12, -1),
        ];
        let a = estimator(300).worst_case(&requests).unwrap();
        let b = estimator(300).worst_case(&requests).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_jitter_free_estimate_matches_hand_computation() {
        let estimator = TimingEstimator::new(
            Building::default(),
            EstimatorConfig::default().without_jitter().with_trials(3),
        );
        let worst = estimator
            .worst_case(&[request(1, 0.0, 1, 5), request(2, 0.0, 2, 6)])
            .unwrap();
        assert!((worst - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_sets_above_ceiling() {
        let estimator = TimingEstimator::new(
            Building::default(),
            EstimatorConfig::default()
                .with_trials(50)
                .with_base_time_ceiling(20.0),
        );
        let err = estimator
            .estimate(&[request(1, 30.0, 1, 2)])
            .unwrap_err();
        assert!(matches!(err, EstimateError::TooSlow { ceiling, .. } if ceiling == 20.0));
    }

    #[test]
    fn test_unknown_floor() {
        let err = estimator(10)
            .worst_case(&[request(1, 0.0, 1, 17)])
            .unwrap_err();
        assert!(matches!(err, EstimateError::UnknownFloor { floor: Floor(17), .. }));
    }

    #[test]
    fn test_appending_a_request_never_decreases_base_time() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let floors: Vec<i32> = (-3..=16).filter(|&f| f != 0).collect();
        let pick = |rng: &mut ChaCha8Rng| floors[rng.gen_range(0..floors.len())];
        let sim = estimator(100);

        for case in 0..100 {
            let count = rng.gen_range(2..=7);
            let mut time = 0.0;
            let mut requests = Vec::new();
            for pid in 0..=count {
                time += rng.gen_range(0..20) as f64 / 10.0;
                let start = pick(&mut rng);
                let mut target = pick(&mut rng);
                while target == start {
                    target = pick(&mut rng);
                }
                requests.push(request(pid, time, start, target));
            }

            let before = sim.worst_case(&requests[..count as usize]).unwrap();
            let after = sim.worst_case(&requests).unwrap();
            assert!(after >= before, "case {case}: {after} < {before}");
        }
    }

    #[test]
    fn test_bundled_append_keeps_base_time() {
        // Appending the last request can let the greedy plan bundle earlier
        // ones and finish the whole set sooner than the first four alone.
        let requests = vec![
            request(0, 0.6, 11, 10),
            request(1, 0.7, -3, 8),
            request(2, 2.3, 9, -1),
            request(3, 4.1, 6, -1),
            request(4, 5.5, 10, 2),
        ];
        let sim = estimator(200);
        let before = sim.estimate(&requests[..4]).unwrap();
        let after = sim.estimate(&requests).unwrap();
        assert!(after.base_time >= before.base_time);
    }
}
