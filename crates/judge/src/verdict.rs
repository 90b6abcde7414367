//! Verdicts and the report handed back to the grader.

use crate::error::JudgeError;
use liftcheck_types::Seconds;
use std::fmt;

const ACCEPTED_MESSAGE: &str = "Accepted | Your answer is correct";

/// Outcome category of a judge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    OutputFormatError,
    EncryptionError,
    /// The data set itself is unusable; the trace was never looked at.
    InvalidInput,
}

impl Verdict {
    /// Headline shown to the candidate.
    pub fn category(&self) -> &'static str {
        match self {
            Verdict::Accepted => "Accepted",
            Verdict::WrongAnswer => "Wrong Answer",
            Verdict::TimeLimitExceeded => "Time Limit Exceeded",
            Verdict::OutputFormatError => "Output Format Error",
            Verdict::EncryptionError => "Encryption Error",
            Verdict::InvalidInput => "Invalid Input",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// Result of judging one trace against one data set.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgeReport {
    /// Whether the trace passed.
    pub accepted: bool,

    pub verdict: Verdict,

    /// `<category> | <detail>` message.
    pub message: String,

    /// Output lines after decryption, sorted by timestamp when they parsed.
    pub output_lines: Vec<String>,

    /// Completion time of an accepted trace, zero otherwise.
    pub elapsed: Seconds,
}

impl JudgeReport {
    pub(crate) fn accepted(output_lines: Vec<String>, elapsed: Seconds) -> Self {
        Self {
            accepted: true,
            verdict: Verdict::Accepted,
            message: ACCEPTED_MESSAGE.to_string(),
            output_lines,
            elapsed,
        }
    }

    pub(crate) fn rejected(error: &JudgeError, output_lines: Vec<String>) -> Self {
        Self {
            accepted: false,
            verdict: error.verdict(),
            message: error.to_string(),
            output_lines,
            elapsed: 0.0,
        }
    }

    /// Render the report as grader-facing text.
    ///
    /// The first line is the message headline. It is followed by the detail
    /// (when the message has exactly one ` | ` separator) and then the
    /// output lines.
    pub fn render(&self) -> String {
        let parts: Vec<&str> = self.message.split(" | ").collect();
        let (headline, detail) = match parts.as_slice() {
            [headline, detail] => (*headline, Some(*detail)),
            _ => (self.message.as_str(), None),
        };

        let mut text = format!("{}\n", headline);
        if let Some(detail) = detail {
            text.push_str(detail);
            text.push('\n');
        }
        text.push_str("Your real output is listed as follows:\n");
        for line in &self.output_lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
