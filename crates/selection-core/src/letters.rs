//! Letter frequency counting over batches of uppercase strings
//!
//! Only `A`..=`Z` are counted; every other character is skipped without error.
//! All 26 letters are always present in a [`LetterCounts`], starting at zero.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Number of letters tracked
pub const ALPHABET_LEN: usize = 26;

/// Per-letter occurrence counts for `A`..=`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "BTreeMap<char, u64>")]
pub struct LetterCounts {
    counts: [u64; ALPHABET_LEN],
}

impl LetterCounts {
    /// All-zero counts
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count letters across every string in `inputs`
    pub fn count<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = Self::new();
        for input in inputs {
            counts.add(input.as_ref());
        }
        counts
    }

    /// Add the letters of one string to the running totals
    pub fn add(&mut self, input: &str) {
        for byte in input.bytes() {
            if byte.is_ascii_uppercase() {
                self.counts[usize::from(byte - b'A')] += 1;
            }
        }
    }

    /// Count for a single letter; zero for anything outside `A`..=`Z`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> u64 {
        if letter.is_ascii_uppercase() {
            self.counts[letter as usize - 'A' as usize]
        } else {
            0
        }
    }

    /// Total number of counted letters
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(letter, count)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        ('A'..='Z').zip(self.counts.iter().copied())
    }
}

impl From<LetterCounts> for BTreeMap<char, u64> {
    fn from(value: LetterCounts) -> Self {
        value.iter().collect()
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (letter, count) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{letter}: {count}")?;
            first = false;
        }
        Ok(())
    }
}

/// Split a newline-separated plain-text body into its lines
///
/// Surrounding whitespace is trimmed first, so a trailing newline does not
/// produce an empty final entry. An empty body yields no lines.
#[must_use]
pub fn split_plain_lines(body: &str) -> Vec<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_mixed_batch() {
        let counts = LetterCounts::count(["ABCDEFG", "ZZZYYY"]);
        for letter in 'A'..='G' {
            assert_eq!(counts.get(letter), 1, "letter {letter}");
        }
        assert_eq!(counts.get('Z'), 3);
        assert_eq!(counts.get('Y'), 3);
        assert_eq!(counts.get('H'), 0);
        assert_eq!(counts.total(), 13);
    }

    #[test]
    fn ignores_non_uppercase() {
        let counts = LetterCounts::count(["abc-123 ÄÖ", "A\tB"]);
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.get('a'), 0);
        assert_eq!(counts.get('A'), 1);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let counts = LetterCounts::count(Vec::<String>::new());
        assert_eq!(counts.iter().count(), ALPHABET_LEN);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn serializes_as_full_map() {
        let map: BTreeMap<char, u64> = LetterCounts::count(["QQ"]).into();
        assert_eq!(map.len(), ALPHABET_LEN);
        assert_eq!(map[&'Q'], 2);
        assert_eq!(map[&'A'], 0);
    }

    #[test]
    fn split_trims_trailing_newline() {
        let lines = split_plain_lines("ABC\nDEF\r\nGHI\n");
        assert_eq!(lines, vec!["ABC", "DEF", "GHI"]);
        assert!(split_plain_lines("  \n").is_empty());
    }
}
