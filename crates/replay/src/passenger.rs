//! Passengers as seen during replay.

use crate::error::ReplayError;
use indexmap::IndexMap;
use liftcheck_types::{Floor, PassengerId, PassengerRequest};

/// Where one passenger is and where they want to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pid: PassengerId,
    current_floor: Floor,
    target: Floor,
    in_elevator: bool,
}

impl Passenger {
    /// A passenger waiting at the pickup floor of `request`.
    pub fn from_request(request: &PassengerRequest) -> Self {
        Self {
            pid: request.pid,
            current_floor: request.start,
            target: request.target,
            in_elevator: false,
        }
    }

    /// Get the passenger id.
    pub fn pid(&self) -> PassengerId {
        self.pid
    }

    /// Get the floor the passenger was last on or left at.
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    /// Whether the passenger is riding.
    pub fn in_elevator(&self) -> bool {
        self.in_elevator
    }

    /// Not riding and standing on the target floor.
    pub fn is_delivered(&self) -> bool {
        !self.in_elevator && self.current_floor == self.target
    }

    pub(crate) fn enter(&mut self, floor: Floor) -> Result<(), ReplayError> {
        if self.in_elevator {
            return Err(ReplayError::AlreadyBoarded {
                pid: self.pid,
                floor,
            });
        }
        if self.current_floor != floor {
            return Err(ReplayError::PassengerNotOnFloor {
                pid: self.pid,
                floor,
                current: self.current_floor,
            });
        }
        self.in_elevator = true;
        Ok(())
    }

    pub(crate) fn leave(&mut self, floor: Floor) -> Result<(), ReplayError> {
        if !self.in_elevator {
            return Err(ReplayError::NotBoarded {
                pid: self.pid,
                floor,
            });
        }
        self.current_floor = floor;
        self.in_elevator = false;
        Ok(())
    }
}

/// Every passenger of a data set, keyed by pid in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassengerTable {
    passengers: IndexMap<PassengerId, Passenger>,
}

impl PassengerTable {
    /// Build the table from validated requests.
    pub fn from_requests(requests: &[PassengerRequest]) -> Self {
        let passengers = requests
            .iter()
            .map(|request| (request.pid, Passenger::from_request(request)))
            .collect();
        Self { passengers }
    }

    pub(crate) fn get_mut(&mut self, pid: PassengerId) -> Result<&mut Passenger, ReplayError> {
        self.passengers
            .get_mut(&pid)
            .ok_or(ReplayError::UnknownPassenger(pid))
    }

    /// Passengers in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.values()
    }
}
