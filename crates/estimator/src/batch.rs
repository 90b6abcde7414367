//! One servicing batch of the greedy pickup simulation.
//!
//! A batch starts from a *main* request and models the elevator carrying it
//! from its pickup floor to its target. Other same-direction requests whose
//! pickup floor lies on the way, and which are already released when the
//! elevator passes, are folded in without a detour.

use liftcheck_types::{FloorCoordinate, Seconds};
use std::ops::RangeInclusive;

/// A request as the simulator sees it: dense floors and a perturbed release time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedRequest {
    /// Effective release time for this trial.
    pub release: Seconds,
    /// Pickup floor.
    pub start: FloorCoordinate,
    /// Drop-off floor.
    pub end: FloorCoordinate,
}

impl PlannedRequest {
    fn is_upward(&self) -> bool {
        self.end > self.start
    }
}

/// Modeled state of a single floor within a batch.
#[derive(Debug, Clone, Copy, Default)]
struct Checkpoint {
    /// Whether the doors are modeled to open here.
    served: bool,
    /// When the elevator is modeled to leave (or pass) this floor.
    time: Seconds,
}

/// Checkpoint table and travel extent for one batch.
///
/// `build_base_span` and `extend_batch` are the only mutators; a batch is
/// discarded once its main request and every bundled request are served.
#[derive(Debug, Clone)]
pub struct SimulationBatch {
    checkpoints: Vec<Checkpoint>,
    run_timespan: Seconds,
    serve_timespan: Seconds,
    /// Where the elevator stands when the batch begins.
    origin: usize,
    /// Pickup floor of the main request.
    start: usize,
    /// Direction of the main request.
    upward: bool,
    /// Farthest floor the batch travels to.
    travel_extent: usize,
}

impl SimulationBatch {
    /// Create an empty batch for an elevator standing at `origin`.
    pub fn new(
        floors: usize,
        origin: FloorCoordinate,
        run_timespan: Seconds,
        serve_timespan: Seconds,
    ) -> Self {
        Self {
            checkpoints: vec![Checkpoint::default(); floors],
            run_timespan,
            serve_timespan,
            origin: origin.index(),
            start: origin.index(),
            upward: true,
            travel_extent: origin.index(),
        }
    }

    /// Floors from `from` to `to` inclusive, walking in the batch direction.
    ///
    /// Empty when `to` lies behind `from`.
    fn span(&self, from: usize, to: usize) -> RangeInclusive<usize> {
        if self.upward {
            from..=to
        } else {
            to..=from
        }
    }

    fn travel(&self, from: usize, to: usize) -> Seconds {
        self.run_timespan * from.abs_diff(to) as f64
    }

    /// Lay down the direct trip for the main request, leaving at `departure`.
    ///
    /// The elevator first travels from its origin to the pickup floor, serves
    /// it, then runs floor by floor to the target and serves that too.
    pub fn build_base_span(&mut self, departure: Seconds, main: &PlannedRequest) {
        let start = main.start.index();
        let end = main.end.index();
        self.start = start;
        self.upward = main.is_upward();
        self.travel_extent = end;

        let base = departure + self.serve_timespan + self.travel(self.origin, start);
        for floor in self.span(start, end) {
            self.checkpoints[floor].time = base + self.travel(start, floor);
        }
        self.checkpoints[start].served = true;
        self.checkpoints[end] = Checkpoint {
            served: true,
            time: base + self.travel(start, end) + self.serve_timespan,
        };
    }

    /// Whether `request` can ride along with this batch.
    ///
    /// It must travel in the batch direction, be picked up between the main
    /// pickup floor and the current travel extent, and already be released
    /// when the elevator is modeled to pass its pickup floor.
    pub fn accepts(&self, request: &PlannedRequest) -> bool {
        let pickup = request.start.index();
        request.is_upward() == self.upward
            && self.span(self.start, self.travel_extent).contains(&pickup)
            && request.release <= self.checkpoints[pickup].time
    }

    /// Fold `request` into the batch, shifting later checkpoints by the extra
    /// stops it needs and stretching the travel extent to cover its target.
    pub fn extend_batch(&mut self, request: &PlannedRequest) {
        let start = request.start.index();
        let end = request.end.index();
        let extent = self.travel_extent;

        let extent_time = self.checkpoints[extent].time;
        for floor in self.span(extent, end) {
            if floor != extent {
                self.checkpoints[floor].time = extent_time + self.travel(extent, floor);
            }
        }

        let mut delay = 0.0;
        if !self.checkpoints[start].served {
            delay += self.serve_timespan;
            self.checkpoints[start].served = true;
        }
        for floor in self.span(start, end) {
            self.checkpoints[floor].time += delay;
        }
        if !self.checkpoints[end].served {
            delay += self.serve_timespan;
            self.checkpoints[end].served = true;
        }
        for floor in self.span(end, extent) {
            self.checkpoints[floor].time += delay;
        }

        let end_inside = if self.upward {
            start < end && end < extent
        } else {
            extent < end && end < start
        };
        if end_inside && !self.checkpoints[extent].served {
            self.checkpoints[extent].served = true;
            self.checkpoints[extent].time += self.serve_timespan;
        }

        self.travel_extent = if self.upward {
            extent.max(end)
        } else {
            extent.min(end)
        };
    }

    /// Floor the elevator ends the batch on.
    pub fn travel_extent(&self) -> FloorCoordinate {
        FloorCoordinate(self.travel_extent)
    }

    /// When the elevator finishes the batch.
    pub fn finish_time(&self) -> Seconds {
        self.checkpoints[self.travel_extent].time
    }

    /// Modeled time at one floor.
    pub fn checkpoint_time(&self, floor: FloorCoordinate) -> Seconds {
        self.checkpoints[floor.index()].time
    }
}
