//! Error types for timing estimation.

use liftcheck_types::{Floor, Seconds};
use thiserror::Error;

/// Errors while estimating time bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// A request names a floor the building does not have.
    #[error("Input Error | Request floor {floor} does not exist: {line}")]
    UnknownFloor { floor: Floor, line: String },

    /// The request set would take unreasonably long to serve.
    #[error("Input Error | Request execute time too long: base time {base_time} reaches {ceiling}")]
    TooSlow { base_time: Seconds, ceiling: Seconds },
}
