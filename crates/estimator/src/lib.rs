//! Timing estimator for elevator request sets.
//!
//! Runs many independent, randomly perturbed simulations of a greedy
//! same-direction pickup strategy and reduces them to two thresholds used to
//! judge candidate traces.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    TimingEstimator                       │
//! │                                                          │
//! │   trials 0..N (rayon)      ChaCha8Rng(seed, stream = k)  │
//! │        │                                                 │
//! │        ▼                                                 │
//! │   ┌──────────────────────────────────────────────────┐   │
//! │   │ trial: jitter timespans + release times          │   │
//! │   │   loop: SimulationBatch per main request         │   │
//! │   │         build_base_span → extend_batch*          │   │
//! │   └──────────────────────────────────────────────────┘   │
//! │        │                                                 │
//! │        ▼  reduce(max)                                    │
//! │   TimeBounds { base_time, max_time }                     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Given the same seed, an estimate is identical every run regardless of how
//! rayon schedules the trials.

mod batch;
mod config;
mod error;
mod estimator;
mod trial;

pub use batch::{PlannedRequest, SimulationBatch};
pub use config::EstimatorConfig;
pub use error::EstimateError;
pub use estimator::{TimeBounds, TimingEstimator};
