//! Core types for the elevator trace checker.
//!
//! This crate holds everything the other crates agree on:
//!
//! - **Floors**: skip-zero [`Floor`] labels, the [`Building`] they live in, and
//!   the dense [`FloorCoordinate`] index used by the timing simulator
//! - **Requests**: [`PassengerRequest`] records parsed from input lines
//! - **Events**: [`OutputEvent`] records parsed from candidate trace lines
//!
//! Parsing is pure: it never consults anything but the line it is given.
//!
//! # Grammar
//!
//! ```text
//! input:   [<time>]<pid>-FROM-<floor>-TO-<floor>
//! output:  [<time>]ARRIVE-<floor> | OPEN-<floor> | CLOSE-<floor>
//!          [<time>]IN-<pid>-<floor> | OUT-<pid>-<floor>
//! ```

mod error;
mod event;
mod floor;
mod lexer;
mod request;

pub use error::{FormatError, LineKind};
pub use event::OutputEvent;
pub use floor::{Building, Floor, FloorCoordinate};
pub use lexer::strip_timestamp;
pub use request::{PassengerId, PassengerRequest};

/// Simulated time in seconds.
pub type Seconds = f64;
