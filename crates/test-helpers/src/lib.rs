//! Test helpers for liftcheck.
//!
//! [`request_line`] renders one input line. [`TraceBuilder`] writes a
//! candidate trace that honours the replay timing rules, so tests only spell
//! out the part of a trace they want to break.

use liftcheck_types::Floor;

/// Ticks per second; every trace timestamp is a whole number of ticks.
const TICKS_PER_SECOND: u64 = 10_000;

/// Render `[<time>]<pid>-FROM-<start>-TO-<target>`.
pub fn request_line(time: f64, pid: u64, start: i32, target: i32) -> String {
    format!("[{:.1}]{}-FROM-{}-TO-{}", time, pid, start, target)
}

fn to_ticks(seconds: f64) -> u64 {
    (seconds * TICKS_PER_SECOND as f64).round() as u64
}

/// Builds a timing-correct candidate trace.
///
/// Time is kept in integer ticks so rendered timestamps are exact.
#[derive(Debug, Clone)]
pub struct TraceBuilder {
    run_ticks: u64,
    serve_ticks: u64,
    floor: Floor,
    now: u64,
    lines: Vec<String>,
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new(0.4, 0.5)
    }
}

impl TraceBuilder {
    /// Start on the ground floor at time zero.
    pub fn new(run_timespan: f64, serve_timespan: f64) -> Self {
        Self {
            run_ticks: to_ticks(run_timespan),
            serve_ticks: to_ticks(serve_timespan),
            floor: Floor::GROUND,
            now: 0,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, body: String) {
        self.lines.push(format!(
            "[{}.{:04}]{}",
            self.now / TICKS_PER_SECOND,
            self.now % TICKS_PER_SECOND,
            body
        ));
    }

    /// Idle until `time` if it lies in the future.
    pub fn wait_until(mut self, time: f64) -> Self {
        self.now = self.now.max(to_ticks(time));
        self
    }

    /// Run floor by floor to `target`, one arrival per floor.
    pub fn move_to(mut self, target: i32) -> Self {
        let target = Floor(target);
        while self.floor != target {
            let step = if target > self.floor { 1 } else { -1 };
            let mut next = self.floor.label() + step;
            if next == 0 {
                next += step;
            }
            self.floor = Floor(next);
            self.now += self.run_ticks;
            self.push(format!("ARRIVE-{}", self.floor));
        }
        self
    }

    /// Open the doors on the current floor.
    pub fn open(mut self) -> Self {
        self.push(format!("OPEN-{}", self.floor));
        self
    }

    /// Close the doors after the minimum service time.
    pub fn close(mut self) -> Self {
        self.now += self.serve_ticks;
        self.push(format!("CLOSE-{}", self.floor));
        self
    }

    /// Board passenger `pid` on the current floor.
    pub fn board(mut self, pid: u64) -> Self {
        self.push(format!("IN-{}-{}", pid, self.floor));
        self
    }

    /// Let passenger `pid` off on the current floor.
    pub fn alight(mut self, pid: u64) -> Self {
        self.push(format!("OUT-{}-{}", pid, self.floor));
        self
    }

    /// Travel to `floor`, open, let `alighting` off, take `boarding` on, close.
    pub fn stop(mut self, floor: i32, alighting: &[u64], boarding: &[u64]) -> Self {
        self = self.move_to(floor).open();
        for &pid in alighting {
            self = self.alight(pid);
        }
        for &pid in boarding {
            self = self.board(pid);
        }
        self.close()
    }

    /// Finish and return the lines.
    pub fn build(self) -> Vec<String> {
        self.lines
    }
}
