//! The elevator state machine.

use crate::config::ReplayConfig;
use crate::error::{ReplayError, SpeedViolation};
use crate::passenger::{Passenger, PassengerTable};
use indexmap::IndexSet;
use liftcheck_types::{Floor, OutputEvent, PassengerId, Seconds};
use tracing::debug;

/// Door and motion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorState {
    /// Idle before the first door cycle.
    Stopped,
    /// Doors closed, free to move.
    Running,
    /// Doors open, passengers may move.
    Serving,
}

/// Replays trace events one at a time, rejecting the first impossible one.
///
/// `floor` and `time` record the last door event. Arrivals are tracked
/// separately so that an `OPEN` can be checked against the floor the
/// elevator actually reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    config: ReplayConfig,
    floor: Floor,
    time: Seconds,
    state: ElevatorState,
    last_arrive_floor: Floor,
    last_arrive_time: Seconds,
    occupants: IndexSet<PassengerId>,
}

impl Elevator {
    /// An idle elevator on the ground floor at time zero.
    pub fn new(config: ReplayConfig) -> Self {
        Self {
            config,
            floor: Floor::GROUND,
            time: 0.0,
            state: ElevatorState::Stopped,
            last_arrive_floor: Floor::GROUND,
            last_arrive_time: 0.0,
            occupants: IndexSet::new(),
        }
    }

    /// Floor of the last door event.
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Time of the last door event.
    pub fn time(&self) -> Seconds {
        self.time
    }

    /// Get the door and motion state.
    pub fn state(&self) -> ElevatorState {
        self.state
    }

    /// Whether the doors are open.
    pub fn is_serving(&self) -> bool {
        self.state == ElevatorState::Serving
    }

    /// Passengers on board, in boarding order.
    pub fn occupants(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.occupants.iter().copied()
    }

    /// Move one floor. The doors must be closed.
    pub fn arrive(&mut self, floor: Floor, time: Seconds) -> Result<(), ReplayError> {
        let closed = !self.is_serving();
        let adjacent = self.last_arrive_floor.is_adjacent(floor);
        let paced = self
            .config
            .covers(time - self.last_arrive_time, self.config.run_timespan);
        if !closed || !adjacent || !paced {
            return Err(ReplayError::InvalidArrival {
                floor,
                time,
                last_floor: self.last_arrive_floor,
                last_time: self.last_arrive_time,
            });
        }

        self.last_arrive_floor = floor;
        self.last_arrive_time = time;
        if self.state == ElevatorState::Stopped {
            self.state = ElevatorState::Running;
        }
        Ok(())
    }

    /// Open the doors.
    pub fn open(&mut self, floor: Floor, time: Seconds) -> Result<(), ReplayError> {
        if self.is_serving() {
            return Err(ReplayError::DoubleOpen(self.floor));
        }
        if floor != self.last_arrive_floor {
            return Err(ReplayError::OpenBeforeArrival {
                floor,
                last_arrival: self.last_arrive_floor,
            });
        }
        let travel = self.floor.distance(floor) as Seconds * self.config.run_timespan;
        if !self.config.covers(time - self.time, travel) {
            return Err(ReplayError::TooFast(SpeedViolation::Run {
                from: self.floor,
                to: floor,
            }));
        }

        self.state = ElevatorState::Serving;
        self.floor = floor;
        self.time = time;
        Ok(())
    }

    /// Close the doors.
    pub fn close(&mut self, floor: Floor, time: Seconds) -> Result<(), ReplayError> {
        if floor != self.floor {
            return Err(ReplayError::FloorMismatch {
                floor,
                current: self.floor,
            });
        }
        if !self.is_serving() {
            return Err(ReplayError::DoubleClose(self.floor));
        }
        if !self
            .config
            .covers(time - self.time, self.config.serve_timespan)
        {
            return Err(ReplayError::TooFast(SpeedViolation::Serve { floor }));
        }

        self.state = ElevatorState::Running;
        self.time = time;
        Ok(())
    }

    /// Take `passenger` on board at `floor`.
    pub fn enter_passenger(
        &mut self,
        passenger: &mut Passenger,
        floor: Floor,
    ) -> Result<(), ReplayError> {
        let pid = passenger.pid();
        if self.occupants.contains(&pid) {
            return Err(ReplayError::DuplicateEntry(pid));
        }
        self.check_door_event(pid, floor)?;
        passenger.enter(floor)?;
        self.occupants.insert(pid);
        Ok(())
    }

    /// Let `passenger` off at `floor`.
    pub fn leave_passenger(
        &mut self,
        passenger: &mut Passenger,
        floor: Floor,
    ) -> Result<(), ReplayError> {
        let pid = passenger.pid();
        if !self.occupants.contains(&pid) {
            return Err(ReplayError::NotOnboard(pid));
        }
        self.check_door_event(pid, floor)?;
        passenger.leave(floor)?;
        self.occupants.shift_remove(&pid);
        Ok(())
    }

    fn check_door_event(&self, pid: PassengerId, floor: Floor) -> Result<(), ReplayError> {
        if !self.is_serving() {
            return Err(ReplayError::NotServing(pid));
        }
        if floor != self.floor {
            return Err(ReplayError::FloorMismatch {
                floor,
                current: self.floor,
            });
        }
        Ok(())
    }

    /// Dispatch one trace event.
    pub fn apply(
        &mut self,
        event: &OutputEvent,
        passengers: &mut PassengerTable,
    ) -> Result<(), ReplayError> {
        let result = match *event {
            OutputEvent::Arrive { floor, time } => self.arrive(floor, time),
            OutputEvent::Open { floor, time } => self.open(floor, time),
            OutputEvent::Close { floor, time } => self.close(floor, time),
            OutputEvent::In { pid, floor, .. } => passengers
                .get_mut(pid)
                .and_then(|passenger| self.enter_passenger(passenger, floor)),
            OutputEvent::Out { pid, floor, .. } => passengers
                .get_mut(pid)
                .and_then(|passenger| self.leave_passenger(passenger, floor)),
        };
        result.inspect_err(|e| {
            debug!(
                time = event.time(),
                floor = %event.floor(),
                error = %e,
                "Transition rejected"
            )
        })
    }
}

impl Default for Elevator {
    fn default() -> Self {
        Self::new(ReplayConfig::default())
    }
}
