//! Minimal cursor over a single line, shared by the request and event parsers.
//!
//! Every method either consumes a token and returns it, or returns `None`
//! and leaves the cursor in an unspecified position. Callers bail out on the
//! first `None`, so positions after a failure are never observed.

use crate::{Floor, Seconds};

/// How many fractional digits a bracketed timestamp must carry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Fraction {
    /// One or more.
    AtLeastOne,
    /// Exactly this many.
    Exactly(usize),
}

pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Consume `lit` verbatim.
    pub(crate) fn literal(&mut self, lit: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(lit)?;
        Some(())
    }

    /// Consume a run of ASCII digits (possibly empty).
    fn digits(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        digits
    }

    /// Consume `[<ws>*<digits>.<digits>]`.
    pub(crate) fn timestamp(&mut self, fraction: Fraction) -> Option<Seconds> {
        self.literal("[")?;
        self.rest = self.rest.trim_start_matches(char::is_whitespace);
        let start = self.rest;
        let whole = self.digits();
        self.literal(".")?;
        let frac = self.digits();
        let valid = match fraction {
            Fraction::AtLeastOne => !frac.is_empty(),
            Fraction::Exactly(n) => frac.len() == n,
        };
        if whole.is_empty() || !valid {
            return None;
        }
        let number = &start[..whole.len() + 1 + frac.len()];
        self.literal("]")?;
        number.parse().ok()
    }

    /// Consume a non-empty run of digits as an unsigned integer.
    pub(crate) fn unsigned(&mut self) -> Option<u64> {
        let digits = self.digits();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }

    /// Consume a floor label: `-?[1-9][0-9]*`.
    pub(crate) fn floor(&mut self) -> Option<Floor> {
        let start = self.rest;
        let negative = self.literal("-").is_some();
        let digits = self.digits();
        if digits.is_empty() || digits.starts_with('0') {
            return None;
        }
        let len = digits.len() + usize::from(negative);
        start[..len].parse().ok().map(Floor)
    }

    /// Succeed only if the whole line was consumed.
    pub(crate) fn finish(self) -> Option<()> {
        self.rest.is_empty().then_some(())
    }
}

/// Strip a leading `[<time>]` tag, returning the remainder of the line.
///
/// Returns `None` if the line does not start with a well-formed tag.
pub fn strip_timestamp(line: &str) -> Option<&str> {
    let mut cursor = Cursor::new(line);
    cursor.timestamp(Fraction::AtLeastOne)?;
    Some(cursor.rest)
}
