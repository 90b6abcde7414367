//! Replay failures.

use liftcheck_types::{Floor, PassengerId, Seconds};
use std::fmt;
use thiserror::Error;

/// Which minimum duration a transition violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedViolation {
    /// Doors opened before the elevator could have travelled the distance.
    Run { from: Floor, to: Floor },
    /// Doors closed before the minimum service time.
    Serve { floor: Floor },
}

impl fmt::Display for SpeedViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedViolation::Run { from, to } => {
                write!(f, "Elevator runs from floor {} to floor {} too fast", from, to)
            }
            SpeedViolation::Serve { floor } => {
                write!(f, "Elevator serves too fast at floor {}", floor)
            }
        }
    }
}

/// A trace transition that the elevator model rejects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    #[error("Wrong State | Elevator cannot arrive at floor {floor} at {time:.4} after floor {last_floor} at {last_time:.4}")]
    InvalidArrival {
        floor: Floor,
        time: Seconds,
        last_floor: Floor,
        last_time: Seconds,
    },

    #[error("Wrong State | Elevator cannot open twice at floor {0}")]
    DoubleOpen(Floor),

    #[error("Wrong State | Elevator cannot open at floor {floor} before arriving there, last arrival was floor {last_arrival}")]
    OpenBeforeArrival { floor: Floor, last_arrival: Floor },

    #[error("Wrong State | {0}")]
    TooFast(SpeedViolation),

    #[error("Wrong State | Elevator is at floor {current}, not floor {floor}")]
    FloorMismatch { floor: Floor, current: Floor },

    #[error("Wrong State | Elevator cannot close twice at floor {0}")]
    DoubleClose(Floor),

    #[error("Wrong State | Passenger {0} already in the elevator so he/she cannot get in")]
    DuplicateEntry(PassengerId),

    #[error("Wrong State | Passenger {0} not in the elevator so he/she cannot get out")]
    NotOnboard(PassengerId),

    #[error("Wrong State | Passenger {0} cannot move when the elevator is not serving")]
    NotServing(PassengerId),

    #[error("Wrong State | Passenger {pid} cannot enter the elevator twice at floor {floor}")]
    AlreadyBoarded { pid: PassengerId, floor: Floor },

    #[error("Wrong State | Passenger {pid} cannot leave the elevator twice at floor {floor}")]
    NotBoarded { pid: PassengerId, floor: Floor },

    #[error("Wrong State | Passenger {0} cannot move because he/she does not exist")]
    UnknownPassenger(PassengerId),

    #[error("Wrong State | Passenger {pid} is at floor {current} and cannot enter at floor {floor}")]
    PassengerNotOnFloor {
        pid: PassengerId,
        floor: Floor,
        current: Floor,
    },
}
