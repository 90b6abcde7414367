//! Verdicts for elevator traces.
//!
//! [`Judge::judge`] ties the other crates together:
//!
//! 1. parse, validate and estimate the data set (`liftcheck-dataset`)
//! 2. optionally decrypt every output line (`liftcheck-cipher`)
//! 3. parse the trace and reject floors outside the building
//! 4. stably sort events by timestamp
//! 5. replay them through the elevator model (`liftcheck-replay`)
//! 6. check the time limit, the doors and every passenger
//!
//! Every failure ends up in the returned [`JudgeReport`]; nothing escapes
//! as an error or a panic.

mod config;
mod error;
mod judge;
mod verdict;

pub use config::JudgeConfig;
pub use error::JudgeError;
pub use judge::Judge;
pub use verdict::{JudgeReport, Verdict};
