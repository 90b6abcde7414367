//! Passenger requests parsed from input lines.

use crate::lexer::{Cursor, Fraction};
use crate::{Floor, FormatError, Seconds};
use std::fmt;

/// Passenger identifier as written in the input.
///
/// Parsed as `u64` so that out-of-range ids survive parsing and can be
/// reported by validation rather than as a format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassengerId(pub u64);

impl PassengerId {
    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One passenger pickup request.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerRequest {
    /// Passenger identifier.
    pub pid: PassengerId,

    /// When the request becomes known to the controller.
    pub release_time: Seconds,

    /// Floor the passenger waits on.
    pub start: Floor,

    /// Floor the passenger wants to reach.
    pub target: Floor,

    /// The line this request was parsed from.
    pub raw: String,
}

impl PassengerRequest {
    /// Build a request and render its canonical input line.
    pub fn new(pid: PassengerId, release_time: Seconds, start: Floor, target: Floor) -> Self {
        let raw = format!(
            "[{:?}]{}-FROM-{}-TO-{}",
            release_time, pid, start, target
        );
        Self {
            pid,
            release_time,
            start,
            target,
            raw,
        }
    }

    /// Parse `[<time>]<pid>-FROM-<floor>-TO-<floor>`.
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        Self::parse_fields(line).ok_or_else(|| FormatError::input(line))
    }

    fn parse_fields(line: &str) -> Option<Self> {
        let mut cursor = Cursor::new(line);
        let release_time = cursor.timestamp(Fraction::AtLeastOne)?;
        let pid = PassengerId(cursor.unsigned()?);
        cursor.literal("-FROM-")?;
        let start = cursor.floor()?;
        cursor.literal("-TO-")?;
        let target = cursor.floor()?;
        cursor.finish()?;

        Some(Self {
            pid,
            release_time,
            start,
            target,
            raw: line.to_string(),
        })
    }

    /// Whether the passenger travels upwards.
    pub fn is_upward(&self) -> bool {
        self.target > self.start
    }
}

impl fmt::Display for PassengerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_parse_request() {
        let request = PassengerRequest::parse("[1.5]17-FROM--2-TO-12").unwrap();
        assert_eq!(request.pid, PassengerId(17));
        assert_eq!(request.release_time, 1.5);
        assert_eq!(request.start, Floor(-2));
        assert_eq!(request.target, Floor(12));
        assert_eq!(request.raw, "[1.5]17-FROM--2-TO-12");
        assert!(request.is_upward());
    }

    #[test]
    fn test_parse_tolerates_whitespace_in_tag() {
        let request = PassengerRequest::parse("[  3.0]2-FROM-5-TO-1").unwrap();
        assert_eq!(request.release_time, 3.0);
        assert!(!request.is_upward());
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        for line in [
            "",
            "1-FROM-1-TO-2",
            "[1]1-FROM-1-TO-2",
            "[1.0]-1-FROM-1-TO-2",
            "[1.0]1-FROM-0-TO-2",
            "[1.0]1-FROM-1-TO-0",
            "[1.0]1-FROM-1-TO-2 ",
            "[1.0]1-from-1-TO-2",
            "[1.0]1-FROM-1-TO-2-TO-3",
            "[1.0]99999999999999999999999-FROM-1-TO-2",
        ] {
            let err = PassengerRequest::parse(line).unwrap_err();
            assert_eq!(err.line(), line);
        }
    }

    #[test]
    fn test_parse_keeps_out_of_range_values_for_validation() {
        let request = PassengerRequest::parse("[0.0]4294967296-FROM-1-TO-99").unwrap();
        assert_eq!(request.pid, PassengerId(1 << 32));
        assert_eq!(request.target, Floor(99));

        let request = PassengerRequest::parse("[0.0]1-FROM-3-TO-3").unwrap();
        assert_eq!(request.start, request.target);
    }

    #[test]
    fn test_canonical_line_round_trips() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let pid = PassengerId(rng.gen_range(0..=i32::MAX as u64));
            let release_time = rng.gen_range(0..2000u32) as f64 / 10.0;
            let start = Floor(*[-3, -2, -1, 1, 2, 9, 16].get(rng.gen_range(0..7)).unwrap());
            let target = Floor(*[-3, -1, 1, 4, 15, 16].get(rng.gen_range(0..6)).unwrap());

            let request = PassengerRequest::new(pid, release_time, start, target);
            let parsed = PassengerRequest::parse(&request.raw).unwrap();
            assert_eq!(parsed, request);
        }
    }
}
