//! Domain rules for a whole request set.

use crate::error::ValidationError;
use liftcheck_types::{Building, PassengerId, PassengerRequest, Seconds};
use std::collections::HashSet;
use tracing::debug;

/// Limits a request set must respect.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Fewest requests a set may contain.
    pub min_requests: usize,

    /// Most requests a set may contain.
    pub max_requests: usize,

    /// Largest permitted passenger id.
    pub max_pid: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_requests: 1,
            max_requests: 30,
            max_pid: i32::MAX as u64,
        }
    }
}

/// Checks a parsed request list against the domain rules.
///
/// Requests are scanned in order and validation stops at the first violation.
#[derive(Debug, Clone)]
pub struct RequestSetValidator {
    building: Building,
    config: ValidatorConfig,
}

impl RequestSetValidator {
    /// Create a validator for the given building.
    pub fn new(building: Building, config: ValidatorConfig) -> Self {
        Self { building, config }
    }

    /// Validate the whole list.
    pub fn validate(&self, requests: &[PassengerRequest]) -> Result<(), ValidationError> {
        let mut last_release: Seconds = 0.0;
        let mut seen = HashSet::with_capacity(requests.len());

        for request in requests {
            self.check_request(request, last_release, &seen)
                .inspect_err(|e| debug!(error = %e, "Request rejected"))?;
            last_release = request.release_time;
            seen.insert(request.pid);
        }

        let count = seen.len();
        if count < self.config.min_requests {
            return Err(ValidationError::EmptyRequestSet);
        }
        if count > self.config.max_requests {
            return Err(ValidationError::TooManyRequests {
                count,
                limit: self.config.max_requests,
            });
        }
        Ok(())
    }

    fn check_request(
        &self,
        request: &PassengerRequest,
        last_release: Seconds,
        seen: &HashSet<PassengerId>,
    ) -> Result<(), ValidationError> {
        let line = || request.raw.clone();

        if request.release_time < 0.0 {
            return Err(ValidationError::NegativeTime(line()));
        }
        if seen.contains(&request.pid) {
            return Err(ValidationError::DuplicatePid(line()));
        }
        if request.pid.as_u64() > self.config.max_pid {
            return Err(ValidationError::PidRange(line()));
        }
        if !self.building.contains(request.start) || !self.building.contains(request.target) {
            return Err(ValidationError::FloorRange(line()));
        }
        if request.start == request.target {
            return Err(ValidationError::DegenerateRequest(line()));
        }
        if request.release_time < last_release {
            return Err(ValidationError::TimeOrder(line()));
        }
        Ok(())
    }
}

impl Default for RequestSetValidator {
    fn default() -> Self {
        Self::new(Building::default(), ValidatorConfig::default())
    }
}
