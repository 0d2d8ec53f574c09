//! Domino tile sequences and their transformations
//!
//! A tile is the text `"<top>-<bottom>"`. Tiles compare by their exact text,
//! so `"4-5"` and `"5-4"` are different tiles. A sequence is ordered and may
//! hold duplicates.
//!
//! Every [`DominoOp`] is applied by [`apply`], a pure function of the current
//! sequence and the snapshot captured at load. [`DominoStore`] owns those two
//! snapshots and swaps the current one on each operation.

use crate::error::TileParseError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Separator between tiles in the wire format
pub const TILE_SEPARATOR: &str = ", ";

/// A single domino tile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    text: String,
    dash: usize,
    top: u32,
    bottom: u32,
}

impl Tile {
    /// Build a tile from two faces
    #[must_use]
    pub fn new(top: u32, bottom: u32) -> Self {
        let text = format!("{top}-{bottom}");
        let dash = top.to_string().len();
        Self {
            text,
            dash,
            top,
            bottom,
        }
    }

    #[inline]
    #[must_use]
    pub fn top(&self) -> u32 {
        self.top
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    /// Sort key: sum of both faces
    #[inline]
    #[must_use]
    pub fn pip_sum(&self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The same tile with its faces swapped, keeping each face's spelling
    #[must_use]
    pub fn flipped(&self) -> Self {
        let (top, bottom) = (&self.text[..self.dash], &self.text[self.dash + 1..]);
        Self {
            text: format!("{bottom}-{top}"),
            dash: bottom.len(),
            top: self.bottom,
            bottom: self.top,
        }
    }
}

impl FromStr for Tile {
    type Err = TileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dash = s
            .find('-')
            .ok_or_else(|| TileParseError::MissingSeparator(s.to_string()))?;
        let parse_face = |face: &str| {
            if face.is_empty() || !face.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TileParseError::invalid_face(s, face));
            }
            face.parse::<u32>()
                .map_err(|_| TileParseError::invalid_face(s, face))
        };
        let top = parse_face(&s[..dash])?;
        let bottom = parse_face(&s[dash + 1..])?;
        Ok(Self {
            text: s.to_string(),
            dash,
            top,
            bottom,
        })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Tile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Parse the comma-separated wire format
///
/// Tokens are trimmed and empty tokens skipped, so stray spaces and a
/// trailing separator are tolerated. An empty string is an empty sequence.
pub fn parse_tiles(s: &str) -> Result<Vec<Tile>, TileParseError> {
    s.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Join tiles back into the wire format
#[must_use]
pub fn join_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(Tile::as_str)
        .collect::<Vec<_>>()
        .join(TILE_SEPARATOR)
}

/// Operation on a tile sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "kebab-case")]
pub enum DominoOp {
    SortAscending,
    SortDescending,
    Flip,
    RemoveDuplicates,
    /// Remove every tile whose text equals the value
    RemoveByValue(String),
    Reset,
}

impl fmt::Display for DominoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SortAscending => f.write_str("sort-asc"),
            Self::SortDescending => f.write_str("sort-desc"),
            Self::Flip => f.write_str("flip"),
            Self::RemoveDuplicates => f.write_str("dedupe"),
            Self::RemoveByValue(v) => write!(f, "remove={v}"),
            Self::Reset => f.write_str("reset"),
        }
    }
}

/// Unrecognised operation name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown domino operation '{0}' (expected sort-asc, sort-desc, flip, dedupe, remove=<tile>, reset)")]
pub struct UnknownOp(pub String);

impl FromStr for DominoOp {
    type Err = UnknownOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sort-asc" | "asc" => Ok(Self::SortAscending),
            "sort-desc" | "desc" => Ok(Self::SortDescending),
            "flip" => Ok(Self::Flip),
            "dedupe" | "remove-dup" => Ok(Self::RemoveDuplicates),
            "reset" => Ok(Self::Reset),
            other => other
                .strip_prefix("remove=")
                .map(|v| Self::RemoveByValue(v.to_string()))
                .ok_or_else(|| UnknownOp(other.to_string())),
        }
    }
}

/// Apply `op` to `current`, producing the next sequence
///
/// `original` is only read by [`DominoOp::Reset`].
#[must_use]
pub fn apply(current: &[Tile], original: &[Tile], op: &DominoOp) -> Vec<Tile> {
    match op {
        DominoOp::SortAscending => {
            let mut next = current.to_vec();
            next.sort_by_key(Tile::pip_sum);
            next
        }
        DominoOp::SortDescending => {
            let mut next = current.to_vec();
            next.sort_by(|a, b| b.pip_sum().cmp(&a.pip_sum()));
            next
        }
        DominoOp::Flip => current.iter().map(Tile::flipped).collect(),
        DominoOp::RemoveDuplicates => {
            let mut seen = std::collections::HashSet::with_capacity(current.len());
            current
                .iter()
                .filter(|&tile| seen.insert(tile.as_str()))
                .cloned()
                .collect()
        }
        DominoOp::RemoveByValue(target) => current
            .iter()
            .filter(|tile| tile.as_str() != target.as_str())
            .cloned()
            .collect(),
        DominoOp::Reset => original.to_vec(),
    }
}

/// Immutable pair of snapshots held after a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominoSnapshot {
    original: Arc<[Tile]>,
    current: Arc<[Tile]>,
}

impl DominoSnapshot {
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        let original: Arc<[Tile]> = tiles.into();
        Self {
            current: Arc::clone(&original),
            original,
        }
    }

    #[inline]
    #[must_use]
    pub fn original(&self) -> &[Tile] {
        &self.original
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> &[Tile] {
        &self.current
    }

    /// Next snapshot after `op`; the original is shared, never copied
    #[must_use]
    pub fn apply(&self, op: &DominoOp) -> Self {
        Self {
            original: Arc::clone(&self.original),
            current: apply(&self.current, &self.original, op).into(),
        }
    }
}

/// Owner of the loaded snapshots and the pending remove-input field
#[derive(Debug, Clone, Default)]
pub struct DominoStore {
    snapshot: Option<DominoSnapshot>,
    input: String,
}

impl DominoStore {
    /// Empty, unloaded store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded with `tiles` as both original and current
    #[must_use]
    pub fn loaded(tiles: Vec<Tile>) -> Self {
        let mut store = Self::new();
        store.load(tiles);
        store
    }

    /// Capture a fresh original snapshot, discarding any prior state
    pub fn load(&mut self, tiles: Vec<Tile>) {
        tracing::debug!(tiles = tiles.len(), "domino set loaded");
        self.snapshot = Some(DominoSnapshot::new(tiles));
    }

    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Option<&DominoSnapshot> {
        self.snapshot.as_ref()
    }

    /// Current sequence; empty before load
    #[must_use]
    pub fn current(&self) -> &[Tile] {
        match &self.snapshot {
            Some(snapshot) => snapshot.current(),
            None => &[],
        }
    }

    /// Original sequence; empty before load
    #[must_use]
    pub fn original(&self) -> &[Tile] {
        match &self.snapshot {
            Some(snapshot) => snapshot.original(),
            None => &[],
        }
    }

    /// Apply an operation. Returns `false` (and does nothing) before load.
    pub fn apply(&mut self, op: &DominoOp) -> bool {
        let Some(snapshot) = &self.snapshot else {
            tracing::debug!(%op, "ignored: no domino set loaded");
            return false;
        };
        let next = snapshot.apply(op);
        tracing::info!(%op, before = snapshot.current().len(), after = next.current().len(), "domino op applied");
        self.snapshot = Some(next);
        if matches!(op, DominoOp::RemoveByValue(_)) {
            self.input.clear();
        }
        true
    }

    /// Pending text of the remove field
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Remove every tile equal to the pending input, then clear the input
    pub fn remove_input(&mut self) -> bool {
        let target = self.input.clone();
        self.apply(&DominoOp::RemoveByValue(target))
    }
}
