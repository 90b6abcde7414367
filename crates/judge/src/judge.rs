//! The judge: one verdict per (data set, trace) pair.

use crate::config::JudgeConfig;
use crate::error::JudgeError;
use crate::verdict::JudgeReport;
use liftcheck_cipher::Decryptor;
use liftcheck_dataset::{InputChecker, InputError, RequestSet};
use liftcheck_replay::{Elevator, PassengerTable};
use liftcheck_types::{OutputEvent, Seconds};
use tracing::{debug, info};

/// Judges candidate traces against data sets.
///
/// A judge holds no state between calls: judging the same pair twice gives
/// the same report.
pub struct Judge {
    config: JudgeConfig,
    checker: InputChecker,
    decryptor: Option<Box<dyn Decryptor>>,
}

impl Judge {
    pub fn new(config: JudgeConfig) -> Self {
        let checker = InputChecker::new(
            config.building,
            config.validator.clone(),
            config.estimator.clone(),
        );
        Self {
            config,
            checker,
            decryptor: None,
        }
    }

    /// Use `decryptor` for encrypted traces.
    pub fn with_decryptor(mut self, decryptor: Box<dyn Decryptor>) -> Self {
        self.decryptor = Some(decryptor);
        self
    }

    /// Check a data set on its own.
    pub fn check_input<S: AsRef<str>>(&self, input: &[S]) -> Result<String, InputError> {
        self.checker.check(input)
    }

    /// Judge `output` against `input`.
    ///
    /// With `check_max_time` the estimated max time is enforced, otherwise
    /// only the absolute limit is. With `decrypt_first` every output line is
    /// decrypted before parsing.
    pub fn judge<I, O>(
        &self,
        input: &[I],
        output: &[O],
        check_max_time: bool,
        decrypt_first: bool,
    ) -> JudgeReport
    where
        I: AsRef<str>,
        O: AsRef<str>,
    {
        let mut lines: Vec<String> = output
            .iter()
            .map(|line| line.as_ref().trim().to_string())
            .collect();

        let result = self
            .checker
            .prepare(input)
            .map_err(JudgeError::from)
            .and_then(|set| {
                if decrypt_first {
                    lines = self.decrypt(&lines)?;
                }
                self.replay(&set, &mut lines, check_max_time)
            });

        let report = match result {
            Ok(elapsed) => JudgeReport::accepted(lines, elapsed),
            Err(e) => {
                debug!(error = %e, "Trace rejected");
                JudgeReport::rejected(&e, lines)
            }
        };
        info!(
            verdict = %report.verdict,
            elapsed = report.elapsed,
            lines = report.output_lines.len(),
            "Judged trace"
        );
        report
    }

    fn decrypt(&self, lines: &[String]) -> Result<Vec<String>, JudgeError> {
        let decryptor = self
            .decryptor
            .as_ref()
            .ok_or(JudgeError::MissingDecryptor)?;
        lines
            .iter()
            .map(|line| decryptor.decrypt_line(line).map(|plain| plain.trim().to_string()))
            .collect::<Result<_, _>>()
            .map_err(JudgeError::from)
    }

    /// Parse, sort and replay the trace, then run the terminal checks.
    ///
    /// On success `lines` is left in replay order.
    fn replay(
        &self,
        set: &RequestSet,
        lines: &mut Vec<String>,
        check_max_time: bool,
    ) -> Result<Seconds, JudgeError> {
        let events = lines
            .iter()
            .map(|line| OutputEvent::parse(line))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(event) = events
            .iter()
            .find(|e| e.is_elevator_event() && !self.config.building.contains(e.floor()))
        {
            return Err(JudgeError::FloorOutOfRange(event.floor()));
        }

        let mut order: Vec<usize> = (0..events.len()).collect();
        order.sort_by(|&a, &b| events[a].time().total_cmp(&events[b].time()));
        let sorted: Vec<String> = order.iter().map(|&i| lines[i].clone()).collect();
        *lines = sorted;

        let mut passengers = PassengerTable::from_requests(&set.requests);
        let mut elevator = Elevator::new(self.config.replay.clone());
        for &i in &order {
            elevator.apply(&events[i], &mut passengers)?;
        }

        let limit = if check_max_time {
            set.bounds.max_time
        } else {
            self.config.absolute_time_limit
        };
        if elevator.time() > limit {
            return Err(JudgeError::TimeLimitExceeded);
        }
        if elevator.is_serving() {
            return Err(JudgeError::DoorNotClosed);
        }
        for passenger in passengers.iter() {
            if passenger.in_elevator() {
                return Err(JudgeError::PassengerStillInside(passenger.pid()));
            }
            if !passenger.is_delivered() {
                return Err(JudgeError::PassengerNotDelivered(passenger.pid()));
            }
        }
        Ok(elevator.time())
    }
}

impl Default for Judge {
    fn default() -> Self {
        Self::new(JudgeConfig::default())
    }
}
