//! Hunk header grammar: `@@ -<start>[,<count>] +<start>[,<count>] @@[ heading]`

use crate::artifacts::diff::line_range::LineRange;
use std::str::FromStr;

const HUNK_OPENING: &str = "@@ ";
const HUNK_CLOSING: &str = "@@";

/// One side (`-<start>[,<count>]` or `+<start>[,<count>]`) of a hunk header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkSpan {
    pub start: u32,
    pub count: Option<u32>,
}

impl HunkSpan {
    /// Number of lines the span covers; an omitted count means a single line
    pub fn len(&self) -> u32 {
        self.count.unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parsed `@@ -<n>[,<m>] +<n>[,<m>] @@` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old: HunkSpan,
    pub new: HunkSpan,
}

/// Why a `@@ ` line is not a hunk header; the parser skips such lines
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HunkHeaderError {
    #[error("missing opening '@@ ' marker")]
    MissingOpening,
    #[error("missing '{sign}' range for the {side} file")]
    MissingRange { side: &'static str, sign: char },
    #[error("invalid number '{0}' in hunk range")]
    InvalidNumber(String),
    #[error("missing closing '@@' marker")]
    MissingClosing,
}

impl HunkHeader {
    pub fn parse(line: &str) -> Result<Self, HunkHeaderError> {
        let rest = line
            .strip_prefix(HUNK_OPENING)
            .ok_or(HunkHeaderError::MissingOpening)?;

        // "-a,b", "+c,d", "@@[ section heading]"
        let mut tokens = rest.splitn(3, ' ');
        let old = parse_span(tokens.next(), '-', "old")?;
        let new = parse_span(tokens.next(), '+', "new")?;

        match tokens.next() {
            Some(tail) if tail == HUNK_CLOSING || tail.starts_with("@@ ") => {
                Ok(HunkHeader { old, new })
            }
            _ => Err(HunkHeaderError::MissingClosing),
        }
    }

    /// Range of the new file this hunk touches
    ///
    /// A pure deletion (new count 0) has no lines of its own in the new file, so
    /// it is reported as a single anchor at the line git names, clamped to the
    /// first line when the deletion happened at the top of the file.
    pub fn new_range(&self) -> LineRange {
        match self.new.count {
            Some(0) | None => LineRange::single(self.new.start),
            Some(count) => LineRange::new(
                self.new.start,
                self.new.start.saturating_add(count - 1),
            ),
        }
    }
}

impl FromStr for HunkHeader {
    type Err = HunkHeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HunkHeader::parse(s)
    }
}

fn parse_span(
    token: Option<&str>,
    sign: char,
    side: &'static str,
) -> Result<HunkSpan, HunkHeaderError> {
    let token = token
        .and_then(|token| token.strip_prefix(sign))
        .ok_or(HunkHeaderError::MissingRange { side, sign })?;

    match token.split_once(',') {
        Some((start, count)) => Ok(HunkSpan {
            start: parse_number(start)?,
            count: Some(parse_number(count)?),
        }),
        None => Ok(HunkSpan {
            start: parse_number(token)?,
            count: None,
        }),
    }
}

fn parse_number(digits: &str) -> Result<u32, HunkHeaderError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HunkHeaderError::InvalidNumber(digits.to_string()));
    }

    digits
        .parse()
        .map_err(|_| HunkHeaderError::InvalidNumber(digits.to_string()))
}
