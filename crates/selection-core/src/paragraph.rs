//! Character-by-character comparison of a retyped paragraph
//!
//! Positions are Unicode scalar values. The diff always spans the longer of
//! the two strings; positions past the end of the reference carry no expected
//! character and render as [`PLACEHOLDER`].

use crate::error::{ValidationError, MIN_PARAGRAPH_LEN};
use serde::Serialize;
use std::fmt;

/// Rendered in place of a missing reference character
pub const PLACEHOLDER: char = '_';

/// Outcome at one position of the diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "expected", rename_all = "snake_case")]
pub enum Outcome {
    /// Input and reference agree
    Match(char),
    /// Input differs or is absent; carries the reference character if any
    Mismatch(Option<char>),
}

impl Outcome {
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    /// Character shown for this position
    #[inline]
    #[must_use]
    pub fn display_char(&self) -> char {
        match self {
            Self::Match(c) | Self::Mismatch(Some(c)) => *c,
            Self::Mismatch(None) => PLACEHOLDER,
        }
    }
}

/// Per-position outcomes plus the mismatch total
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiffResult {
    outcomes: Vec<Outcome>,
    mismatches: usize,
}

impl DiffResult {
    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[inline]
    #[must_use]
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Rendered lines, each with a `^` marker line under its mismatches
    ///
    /// Lines break at reference newlines. A mismatched newline is marked one
    /// column past the end of its line. An empty diff has no lines.
    #[must_use]
    pub fn lines(&self) -> Vec<DiffLine> {
        let mut lines = Vec::new();
        if self.outcomes.is_empty() {
            return lines;
        }
        let mut current = DiffLine::default();
        for outcome in &self.outcomes {
            let shown = outcome.display_char();
            let marker = if outcome.is_match() { ' ' } else { '^' };
            if shown == '\n' {
                current.markers.push(marker);
                lines.push(current.finish());
                current = DiffLine::default();
            } else {
                current.text.push(shown);
                current.markers.push(marker);
            }
        }
        lines.push(current.finish());
        lines
    }
}

/// One rendered line of a [`DiffResult`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffLine {
    pub text: String,
    /// `^` under mismatched columns; empty when the line matches
    pub markers: String,
}

impl DiffLine {
    fn finish(mut self) -> Self {
        let kept = self.markers.trim_end().len();
        self.markers.truncate(kept);
        self
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            write!(f, "{}", outcome.display_char())?;
        }
        Ok(())
    }
}

/// Compare `input` against `reference` position by position
#[must_use]
pub fn diff(input: &str, reference: &str) -> DiffResult {
    let mut typed = input.chars();
    let mut expected = reference.chars();
    let mut outcomes = Vec::with_capacity(input.len().max(reference.len()));
    let mut mismatches = 0;

    loop {
        let outcome = match (typed.next(), expected.next()) {
            (None, None) => break,
            (Some(t), Some(e)) if t == e => Outcome::Match(e),
            (_, e) => {
                mismatches += 1;
                Outcome::Mismatch(e)
            }
        };
        outcomes.push(outcome);
    }

    DiffResult {
        outcomes,
        mismatches,
    }
}

/// Field validation for retyped text
pub fn validate(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Required);
    }
    let actual = input.chars().count();
    if actual < MIN_PARAGRAPH_LEN {
        return Err(ValidationError::TooShort {
            min: MIN_PARAGRAPH_LEN,
            actual,
        });
    }
    Ok(())
}

/// Whole-string acknowledgement, independent of the diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Matched,
    Mismatched,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub fn of(input: &str, reference: &str) -> Self {
        if input == reference {
            Self::Matched
        } else {
            Self::Mismatched
        }
    }

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Matched)
    }

    /// User-facing acknowledgement text
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Matched => "Input is the same and successful",
            Self::Mismatched => "Input does not match",
        }
    }
}

/// Result of submitting a retyped paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphCheck {
    pub verdict: Verdict,
    pub diff: DiffResult,
}

/// Validate, then compare. Validation failure blocks the diff.
pub fn check(input: &str, reference: &str) -> Result<ParagraphCheck, ValidationError> {
    validate(input)?;
    let verdict = Verdict::of(input, reference);
    let diff = diff(input, reference);
    tracing::debug!(
        mismatches = diff.mismatches(),
        positions = diff.len(),
        "paragraph compared"
    );
    Ok(ParagraphCheck { verdict, diff })
}
