//! Error types for line parsing.

use std::fmt;
use thiserror::Error;

/// Which output grammar a trace line was parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// An `ARRIVE` event line.
    Arrive,
    /// An `OPEN` event line.
    Open,
    /// A `CLOSE` event line.
    Close,
    /// An `IN` event line.
    In,
    /// An `OUT` event line.
    Out,
    /// A line whose keyword was not recognised.
    Unknown,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Arrive => "Arrive State",
            LineKind::Open => "Elevator OPEN State",
            LineKind::Close => "Elevator CLOSE State",
            LineKind::In => "Passenger IN State",
            LineKind::Out => "Passenger OUT State",
            LineKind::Unknown => "State",
        };
        f.write_str(name)
    }
}

/// A line did not match its grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A request line is malformed.
    #[error("Input Format Error | Invalid Input: {line}")]
    Input { line: String },

    /// A trace line is malformed or carries an unknown keyword.
    #[error("Output Format Error | Invalid {kind}: {line}")]
    Output { kind: LineKind, line: String },
}

impl FormatError {
    pub(crate) fn input(line: &str) -> Self {
        Self::Input {
            line: line.to_string(),
        }
    }

    pub(crate) fn output(kind: LineKind, line: &str) -> Self {
        Self::Output {
            kind,
            line: line.to_string(),
        }
    }

    /// The offending line, as given.
    pub fn line(&self) -> &str {
        match self {
            FormatError::Input { line } | FormatError::Output { line, .. } => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_category_prefix() {
        let err = FormatError::input("[1.0]x");
        assert_eq!(err.to_string(), "Input Format Error | Invalid Input: [1.0]x");
        assert_eq!(err.line(), "[1.0]x");

        let err = FormatError::output(LineKind::Unknown, "[1.0000]JUMP-3");
        assert_eq!(
            err.to_string(),
            "Output Format Error | Invalid State: [1.0000]JUMP-3"
        );
    }
}
