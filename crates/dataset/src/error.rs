//! Error types for data set checking.

use liftcheck_estimator::EstimateError;
use liftcheck_types::FormatError;
use thiserror::Error;

/// A request set violates a domain rule.
///
/// Every per-request variant carries the raw line of the offending request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input Error | Request time negative: {0}")]
    NegativeTime(String),

    #[error("Input Error | Request pid repeated: {0}")]
    DuplicatePid(String),

    #[error("Input Error | Request pid out of range: {0}")]
    PidRange(String),

    #[error("Input Error | Request floor out of range: {0}")]
    FloorRange(String),

    #[error("Input Error | Request has same start and end: {0}")]
    DegenerateRequest(String),

    #[error("Input Error | Request time decreasing: {0}")]
    TimeOrder(String),

    #[error("Input Error | There is no valid request")]
    EmptyRequestSet,

    #[error("Input Error | Too many valid requests: {count} exceeds {limit}")]
    TooManyRequests { count: usize, limit: usize },
}

/// Any reason a data set cannot be used for judging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Timing(#[from] EstimateError),
}
