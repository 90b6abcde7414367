//! Elevator and passenger events parsed from candidate trace lines.

use crate::error::LineKind;
use crate::lexer::{Cursor, Fraction};
use crate::{Floor, FormatError, PassengerId, Seconds};

/// Fractional digits every output timestamp carries.
const OUTPUT_TIME_PRECISION: usize = 4;

/// One event in a candidate trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputEvent {
    /// The elevator reached a floor.
    Arrive { floor: Floor, time: Seconds },
    /// The doors opened.
    Open { floor: Floor, time: Seconds },
    /// The doors closed.
    Close { floor: Floor, time: Seconds },
    /// A passenger boarded.
    In {
        pid: PassengerId,
        floor: Floor,
        time: Seconds,
    },
    /// A passenger got off.
    Out {
        pid: PassengerId,
        floor: Floor,
        time: Seconds,
    },
}

impl OutputEvent {
    /// Parse one trace line.
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        let keyword = first_keyword(line);
        let kind = match keyword {
            "ARRIVE" => LineKind::Arrive,
            "OPEN" => LineKind::Open,
            "CLOSE" => LineKind::Close,
            "IN" => LineKind::In,
            "OUT" => LineKind::Out,
            _ => return Err(FormatError::output(LineKind::Unknown, line)),
        };
        Self::parse_fields(kind, keyword, line).ok_or_else(|| FormatError::output(kind, line))
    }

    fn parse_fields(kind: LineKind, keyword: &str, line: &str) -> Option<Self> {
        let mut cursor = Cursor::new(line);
        let time = cursor.timestamp(Fraction::Exactly(OUTPUT_TIME_PRECISION))?;
        cursor.literal(keyword)?;
        cursor.literal("-")?;
        let event = match kind {
            LineKind::Arrive => OutputEvent::Arrive {
                floor: cursor.floor()?,
                time,
            },
            LineKind::Open => OutputEvent::Open {
                floor: cursor.floor()?,
                time,
            },
            LineKind::Close => OutputEvent::Close {
                floor: cursor.floor()?,
                time,
            },
            LineKind::In | LineKind::Out => {
                let pid = PassengerId(cursor.unsigned()?);
                cursor.literal("-")?;
                let floor = cursor.floor()?;
                if kind == LineKind::In {
                    OutputEvent::In { pid, floor, time }
                } else {
                    OutputEvent::Out { pid, floor, time }
                }
            }
            LineKind::Unknown => return None,
        };
        cursor.finish()?;
        Some(event)
    }

    /// Timestamp of the event.
    pub fn time(&self) -> Seconds {
        match *self {
            OutputEvent::Arrive { time, .. }
            | OutputEvent::Open { time, .. }
            | OutputEvent::Close { time, .. }
            | OutputEvent::In { time, .. }
            | OutputEvent::Out { time, .. } => time,
        }
    }

    /// Floor the event happened at.
    pub fn floor(&self) -> Floor {
        match *self {
            OutputEvent::Arrive { floor, .. }
            | OutputEvent::Open { floor, .. }
            | OutputEvent::Close { floor, .. }
            | OutputEvent::In { floor, .. }
            | OutputEvent::Out { floor, .. } => floor,
        }
    }

    /// Whether this is an elevator movement or door event.
    pub fn is_elevator_event(&self) -> bool {
        matches!(
            self,
            OutputEvent::Arrive { .. } | OutputEvent::Open { .. } | OutputEvent::Close { .. }
        )
    }
}

/// The first run of uppercase letters anywhere in the line.
///
/// The keyword decides which grammar a line is held to, so a line with a
/// broken timestamp is still reported against its own event kind.
fn first_keyword(line: &str) -> &str {
    let Some(start) = line.find(|c: char| c.is_ascii_uppercase()) else {
        return "";
    };
    let rest = &line[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elevator_events() {
        assert_eq!(
            OutputEvent::parse("[   0.4000]ARRIVE-2").unwrap(),
            OutputEvent::Arrive {
                floor: Floor(2),
                time: 0.4
            }
        );
        assert_eq!(
            OutputEvent::parse("[1.2000]OPEN--3").unwrap(),
            OutputEvent::Open {
                floor: Floor(-3),
                time: 1.2
            }
        );
        let close = OutputEvent::parse("[12.0000]CLOSE-16").unwrap();
        assert_eq!(close.floor(), Floor(16));
        assert_eq!(close.time(), 12.0);
        assert!(close.is_elevator_event());
    }

    #[test]
    fn test_parse_passenger_events() {
        assert_eq!(
            OutputEvent::parse("[2.5000]IN-7--1").unwrap(),
            OutputEvent::In {
                pid: PassengerId(7),
                floor: Floor(-1),
                time: 2.5
            }
        );
        let out = OutputEvent::parse("[3.0000]OUT-2147483647-5").unwrap();
        assert_eq!(
            out,
            OutputEvent::Out {
                pid: PassengerId(2147483647),
                floor: Floor(5),
                time: 3.0
            }
        );
        assert!(!out.is_elevator_event());
    }

    #[test]
    fn test_unknown_keyword() {
        let err = OutputEvent::parse("[1.0000]JUMP-3").unwrap_err();
        assert_eq!(
            err,
            FormatError::Output {
                kind: LineKind::Unknown,
                line: "[1.0000]JUMP-3".to_string()
            }
        );
        assert!(OutputEvent::parse("").is_err());
    }

    #[test]
    fn test_malformed_arguments_name_the_keyword() {
        for (line, kind) in [
            ("[1.000]OPEN-1", LineKind::Open),
            ("[1.0000]OPEN-0", LineKind::Open),
            ("[1.0000]OPEN-1-2", LineKind::Open),
            ("[1.0000]ARRIVE", LineKind::Arrive),
            ("[1.0000]CLOSE-x", LineKind::Close),
            ("[1.0000]IN-1", LineKind::In),
            ("[1.0000]OUT--1-1", LineKind::Out),
            ("1.0000]OUT-1-1", LineKind::Out),
            ("[1.0000]-OPEN-1", LineKind::Open),
            ("garbage", LineKind::Unknown),
        ] {
            match OutputEvent::parse(line) {
                Err(FormatError::Output { kind: got, line: got_line }) => {
                    assert_eq!(got, kind, "{line}");
                    assert_eq!(got_line, line);
                }
                other => panic!("unexpected result for {line}: {other:?}"),
            }
        }
    }
}
