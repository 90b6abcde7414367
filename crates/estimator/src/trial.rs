//! A single randomized trial of the greedy pickup strategy.

use crate::batch::{PlannedRequest, SimulationBatch};
use crate::config::EstimatorConfig;
use liftcheck_types::{FloorCoordinate, Seconds};
use rand::Rng;

/// A request placed on the dense floor axis, before release-time jitter.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrialRequest {
    pub release_time: Seconds,
    pub start: FloorCoordinate,
    pub end: FloorCoordinate,
}

/// Static inputs shared by every trial of one estimate.
pub(crate) struct TrialPlan<'a> {
    pub requests: &'a [TrialRequest],
    pub floors: usize,
    pub ground: FloorCoordinate,
}

/// Run one trial and return the worst time any prefix of the requests is
/// fully served.
///
/// Draw order is fixed: run jitter, serve jitter, then one release jitter per
/// request in input order. Every prefix replays the same draws, so a request
/// appended to the set can never lower the result.
pub(crate) fn run_trial(
    plan: &TrialPlan<'_>,
    config: &EstimatorConfig,
    rng: &mut impl Rng,
) -> Seconds {
    let run_timespan = config.base_run_timespan + rng.gen_range(0.0..=config.run_jitter);
    let serve_timespan = config.base_serve_timespan + rng.gen_range(0.0..=config.serve_jitter);
    let requests = jitter_releases(plan.requests, config.release_jitter, rng);

    (1..=requests.len())
        .map(|len| simulate(plan, &requests[..len], run_timespan, serve_timespan))
        .fold(0.0, f64::max)
}

/// Greedily serve `requests` and return the time the last one is served.
fn simulate(
    plan: &TrialPlan<'_>,
    requests: &[PlannedRequest],
    run_timespan: Seconds,
    serve_timespan: Seconds,
) -> Seconds {
    let mut served = vec![false; requests.len()];
    let mut clock: Seconds = 0.0;
    let mut position = plan.ground;

    while let Some(main) = served.iter().position(|done| !done) {
        let mut batch =
            SimulationBatch::new(plan.floors, position, run_timespan, serve_timespan);
        batch.build_base_span(clock.max(requests[main].release), &requests[main]);
        served[main] = true;

        while let Some(next) =
            (0..requests.len()).find(|&i| !served[i] && batch.accepts(&requests[i]))
        {
            batch.extend_batch(&requests[next]);
            served[next] = true;
        }

        position = batch.travel_extent();
        clock = batch.finish_time();
    }

    clock
}

/// Perturb release times while keeping them non-decreasing.
fn jitter_releases(
    requests: &[TrialRequest],
    jitter: Seconds,
    rng: &mut impl Rng,
) -> Vec<PlannedRequest> {
    let mut previous: Seconds = 0.0;
    requests
        .iter()
        .map(|request| {
            let disturb = rng.gen_range(-jitter..=jitter);
            let release = (request.release_time + disturb).max(previous);
            previous = release;
            PlannedRequest {
                release,
                start: request.start,
                end: request.end,
            }
        })
        .collect()
}
