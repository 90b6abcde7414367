//! Parse, validate and estimate a data set in one pass.

use crate::error::InputError;
use crate::validator::{RequestSetValidator, ValidatorConfig};
use liftcheck_estimator::{EstimatorConfig, TimeBounds, TimingEstimator};
use liftcheck_types::{Building, FormatError, PassengerRequest};
use tracing::info;

/// A data set that is ready to judge against.
#[derive(Debug, Clone)]
pub struct RequestSet {
    /// Requests in input order.
    pub requests: Vec<PassengerRequest>,

    /// Thresholds for candidate completion time.
    pub bounds: TimeBounds,
}

/// Runs every data set check in order, failing fast.
#[derive(Debug, Clone)]
pub struct InputChecker {
    validator: RequestSetValidator,
    estimator: TimingEstimator,
}

impl InputChecker {
    /// Create a checker for the given building.
    pub fn new(
        building: Building,
        validator_config: ValidatorConfig,
        estimator_config: EstimatorConfig,
    ) -> Self {
        Self {
            validator: RequestSetValidator::new(building, validator_config),
            estimator: TimingEstimator::new(building, estimator_config),
        }
    }

    /// Parse every line, stopping at the first malformed one.
    ///
    /// Lines are trimmed before parsing.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Vec<PassengerRequest>, FormatError> {
        lines
            .iter()
            .map(|line| PassengerRequest::parse(line.as_ref().trim()))
            .collect()
    }

    /// Parse, validate and estimate the data set.
    pub fn prepare<S: AsRef<str>>(&self, lines: &[S]) -> Result<RequestSet, InputError> {
        let requests = Self::parse(lines)?;
        self.validator.validate(&requests)?;
        let bounds = self.estimator.estimate(&requests)?;
        Ok(RequestSet { requests, bounds })
    }

    /// Check a data set and describe the result for whoever authored it.
    pub fn check<S: AsRef<str>>(&self, lines: &[S]) -> Result<String, InputError> {
        let set = self.prepare(lines)?;
        info!(requests = set.requests.len(), "Input accepted");
        Ok(format!(
            "Your input is valid, base time is {}, max time is {}",
            set.bounds.base_time, set.bounds.max_time
        ))
    }
}

impl Default for InputChecker {
    fn default() -> Self {
        Self::new(
            Building::default(),
            ValidatorConfig::default(),
            EstimatorConfig::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;
    use liftcheck_estimator::EstimateError;
    use liftcheck_test_helpers::request_line;

    fn checker() -> InputChecker {
        InputChecker::new(
            Building::default(),
            ValidatorConfig::default(),
            EstimatorConfig::default().with_trials(200),
        )
    }

    #[test]
    fn test_check_reports_bounds() {
        let lines = vec![request_line(0.0, 1, 1, 5)];
        assert_eq!(
            checker().check(&lines).unwrap(),
            "Your input is valid, base time is 3, max time is 8"
        );
    }

    #[test]
    fn test_lines_are_trimmed() {
        let lines = vec!["  [0.0]1-FROM-1-TO-5 \n".to_string()];
        let set = checker().prepare(&lines).unwrap();
        assert_eq!(set.requests[0].raw, "[0.0]1-FROM-1-TO-5");
    }

    #[test]
    fn test_format_error_wins_over_later_violations() {
        let lines = vec![
            request_line(0.0, 1, 1, 5),
            "[0.0]1-FROM-1-TO-5".to_string(),
            "garbage".to_string(),
        ];
        assert!(matches!(
            checker().prepare(&lines),
            Err(InputError::Format(_))
        ));
    }

    #[test]
    fn test_duplicate_pid_rejected_before_estimation() {
        let lines = vec![request_line(0.0, 1, 1, 5), request_line(0.5, 1, 2, 3)];
        let err = checker().prepare(&lines).unwrap_err();
        assert_eq!(
            err,
            InputError::Validation(ValidationError::DuplicatePid(lines[1].clone()))
        );
        assert!(err.to_string().starts_with("Input Error | Request pid repeated"));
    }

    #[test]
    fn test_slow_set_is_infeasible() {
        let lines = vec![request_line(200.0, 1, 1, 2)];
        assert!(matches!(
            checker().prepare(&lines),
            Err(InputError::Timing(EstimateError::TooSlow { .. }))
        ));
    }
}
