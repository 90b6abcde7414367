//! Trace replay for the elevator checker.
//!
//! A candidate trace is replayed event by event through an [`Elevator`],
//! which owns the door state and the set of passengers on board, and a
//! [`PassengerTable`], which records where every passenger of the data set
//! currently is. The first transition that breaks a rule stops the replay
//! with a [`ReplayError`].
//!
//! # State machine
//!
//! ```text
//!   Stopped ──open──► Serving ──close──► Running ──open──► Serving ...
//!      │                                   ▲
//!      └───────────────arrive──────────────┘
//! ```
//!
//! `arrive` moves the elevator one physical floor with the doors closed and
//! never changes the door state. `IN`/`OUT` events are only legal while
//! `Serving`.
//!
//! Replay is strictly sequential: every check depends on the state left by
//! the events before it.

mod config;
mod elevator;
mod error;
mod passenger;

pub use config::ReplayConfig;
pub use elevator::{Elevator, ElevatorState};
pub use error::{ReplayError, SpeedViolation};
pub use passenger::{Passenger, PassengerTable};
