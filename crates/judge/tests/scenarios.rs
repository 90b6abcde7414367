//! End-to-end judging scenarios.

use liftcheck_cipher::{DecryptionError, Decryptor};
use liftcheck_judge::{Judge, JudgeConfig, Verdict};
use liftcheck_test_helpers::{request_line, TraceBuilder};

fn judge() -> Judge {
    Judge::new(JudgeConfig::default().with_trials(200).with_seed(42))
}

fn single_ride() -> (Vec<String>, Vec<String>) {
    let input = vec![request_line(0.0, 1, 1, 5)];
    let output = TraceBuilder::default()
        .stop(1, &[], &[1])
        .stop(5, &[1], &[])
        .build();
    (input, output)
}

#[test]
fn test_correct_trace_is_accepted() {
    let (input, output) = single_ride();
    let report = judge().judge(&input, &output, true, false);

    assert!(report.accepted, "{}", report.message);
    assert_eq!(report.verdict, Verdict::Accepted);
    assert_eq!(report.message, "Accepted | Your answer is correct");
    assert!((report.elapsed - 2.6).abs() < 1e-9);
}

#[test]
fn test_double_open_is_wrong() {
    let input = vec![request_line(0.0, 1, 1, 5)];
    let output = TraceBuilder::default().open().open().build();
    let report = judge().judge(&input, &output, true, false);

    assert!(!report.accepted);
    assert_eq!(report.verdict, Verdict::WrongAnswer);
    assert_eq!(
        report.message,
        "Wrong State | Elevator cannot open twice at floor 1"
    );
}

#[test]
fn test_duplicate_pid_is_invalid_input() {
    let input = vec![request_line(0.0, 1, 1, 5), request_line(0.5, 1, 2, 3)];
    let (_, output) = single_ride();
    let report = judge().judge(&input, &output, true, false);

    assert_eq!(report.verdict, Verdict::InvalidInput);
    assert_eq!(
        report.message,
        "Input Error | Request pid repeated: [0.5]1-FROM-2-TO-3"
    );
    assert_eq!(report.output_lines, output);
}

#[test]
fn test_passenger_left_inside() {
    let input = vec![request_line(0.0, 1, 1, 5)];
    let output = TraceBuilder::default()
        .stop(1, &[], &[1])
        .stop(5, &[], &[])
        .build();
    let report = judge().judge(&input, &output, true, false);

    assert_eq!(report.verdict, Verdict::WrongAnswer);
    assert_eq!(
        report.message,
        "Wrong Answer | Passenger 1 is still in the elevator"
    );
}

#[test]
fn test_too_many_requests() {
    let input: Vec<_> = (0..31).map(|pid| request_line(0.0, pid, 1, 2)).collect();
    let report = judge().judge(&input, &Vec::<String>::new(), true, false);

    assert_eq!(report.verdict, Verdict::InvalidInput);
    assert!(report.message.contains("31 exceeds 30"), "{}", report.message);
}

#[test]
fn test_untouched_passenger_is_not_delivered() {
    let input = vec![request_line(0.0, 1, 1, 5), request_line(0.0, 2, 3, 4)];
    let (_, output) = single_ride();
    let report = judge().judge(&input, &output, true, false);

    assert_eq!(
        report.message,
        "Wrong Answer | Passenger 2 has not arrived at his/her target floor yet"
    );
}

#[test]
fn test_time_limit() {
    let input = vec![request_line(0.0, 1, 1, 2)];
    let output = TraceBuilder::default()
        .wait_until(10.0)
        .stop(1, &[], &[1])
        .stop(2, &[1], &[])
        .build();

    let strict = judge().judge(&input, &output, true, false);
    assert_eq!(strict.verdict, Verdict::TimeLimitExceeded);
    assert_eq!(
        strict.message,
        "Time Limit Exceeded | Your program exceeded max time limit."
    );

    let lenient = judge().judge(&input, &output, false, false);
    assert_eq!(lenient.verdict, Verdict::Accepted, "{}", lenient.message);
}

#[test]
fn test_absolute_time_limit() {
    let input = vec![request_line(0.0, 1, 1, 2)];
    let output = TraceBuilder::default()
        .wait_until(200.0)
        .stop(1, &[], &[1])
        .stop(2, &[1], &[])
        .build();

    let report = judge().judge(&input, &output, false, false);
    assert_eq!(report.verdict, Verdict::TimeLimitExceeded);
    assert_eq!(
        report.message,
        "Time Limit Exceeded | Your program exceeded max time limit."
    );
}

#[test]
fn test_judging_twice_gives_the_same_report() {
    let (input, output) = single_ride();
    let judge = judge();
    let first = judge.judge(&input, &output, true, false);
    let second = judge.judge(&input, &output, true, false);
    assert_eq!(first, second);

    let broken = TraceBuilder::default().open().open().build();
    assert_eq!(
        judge.judge(&input, &broken, true, false),
        judge.judge(&input, &broken, true, false)
    );
}

/// Stands in for a real cipher: the token is the line reversed.
struct Reversed;

impl Decryptor for Reversed {
    fn decrypt(&self, token: &str) -> Result<String, DecryptionError> {
        if token.is_empty() {
            return Err(DecryptionError::MissingContent);
        }
        Ok(token.chars().rev().collect())
    }
}

fn hide(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("[0.0000]{}", line.chars().rev().collect::<String>()))
        .collect()
}

#[test]
fn test_encrypted_trace() {
    let (input, output) = single_ride();
    let judge = judge().with_decryptor(Box::new(Reversed));

    let report = judge.judge(&input, &hide(&output), true, true);
    assert_eq!(report.verdict, Verdict::Accepted, "{}", report.message);
    assert_eq!(report.output_lines, output);

    let mut broken = hide(&output);
    broken.push("[1.0000]".to_string());
    let report = judge.judge(&input, &broken, true, true);
    assert_eq!(report.verdict, Verdict::EncryptionError);
}

#[test]
fn test_encrypted_trace_needs_a_decryptor() {
    let (input, output) = single_ride();
    let report = judge().judge(&input, &hide(&output), true, true);
    assert_eq!(report.verdict, Verdict::EncryptionError);
}

#[test]
fn test_report_rendering() {
    let input = vec![request_line(0.0, 1, 1, 5)];
    let output = TraceBuilder::default().open().open().build();
    let text = judge().judge(&input, &output, true, false).render();
    assert_eq!(
        text,
        "Wrong State\n\
         Elevator cannot open twice at floor 1\n\
         Your real output is listed as follows:\n\
         [0.0000]OPEN-1\n\
         [0.0000]OPEN-1\n"
    );
}
