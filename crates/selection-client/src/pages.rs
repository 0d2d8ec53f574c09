//! Page-level state: one fetch, then local transforms
//!
//! Each page starts [`LoadState::Pending`], performs a single fetch through a
//! [`SelectionApi`], and settles. Fetch failures are recovered here and kept
//! in the state for display; they never propagate further.

use crate::api::SelectionApi;
use crate::error::FetchError;
use crate::models::User;
use selection_core::domino::{join_tiles, DominoOp, DominoStore};
use selection_core::paragraph::{self, ParagraphCheck};
use selection_core::{DiffResult, LetterCounts, LoadState, Tile, ValidationError, Verdict};
use serde::Serialize;

/// Fetched strings and their combined letter counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabetsView {
    pub strings: Vec<String>,
    pub counts: LetterCounts,
}

impl AlphabetsView {
    #[must_use]
    pub fn new(strings: Vec<String>) -> Self {
        let counts = LetterCounts::count(&strings);
        Self { strings, counts }
    }
}

/// Fetch random strings and count their letters
pub async fn load_alphabets(api: &dyn SelectionApi) -> LoadState<AlphabetsView, FetchError> {
    let state: LoadState<_, _> = api.random_strings().await.map(AlphabetsView::new).into();
    log_settled("alphabets", &state);
    state
}

/// Fetch the user list
pub async fn load_users(api: &dyn SelectionApi) -> LoadState<Vec<User>, FetchError> {
    let state: LoadState<_, _> = api.users().await.into();
    log_settled("users", &state);
    state
}

/// Retyping page: a reference paragraph and the last submission result
#[derive(Debug, Default)]
pub struct ParagraphPage {
    reference: LoadState<String, FetchError>,
    last_check: Option<ParagraphCheck>,
}

impl ParagraphPage {
    /// Page with an already known reference text
    #[must_use]
    pub fn with_reference(text: impl Into<String>) -> Self {
        Self {
            reference: LoadState::Resolved(text.into()),
            last_check: None,
        }
    }

    /// Fetch (or refetch) the reference paragraph
    ///
    /// Clears the previous submission result.
    pub async fn refresh(&mut self, api: &dyn SelectionApi) {
        self.reference = LoadState::Pending;
        self.last_check = None;
        self.reference = api.paragraph().await.into();
        log_settled("paragraph", &self.reference);
    }

    #[inline]
    #[must_use]
    pub fn reference(&self) -> &LoadState<String, FetchError> {
        &self.reference
    }

    #[inline]
    #[must_use]
    pub fn last_check(&self) -> Option<&ParagraphCheck> {
        self.last_check.as_ref()
    }

    /// Validate and compare `input` against the reference
    ///
    /// With no reference loaded the input cannot match: the result is a
    /// mismatch verdict with an empty diff.
    pub fn submit(&mut self, input: &str) -> Result<&ParagraphCheck, ValidationError> {
        paragraph::validate(input)?;
        let check = match self.reference.data() {
            Some(reference) => paragraph::check(input, reference)?,
            None => {
                tracing::warn!("paragraph submitted before a reference was loaded");
                ParagraphCheck {
                    verdict: Verdict::Mismatched,
                    diff: DiffResult::default(),
                }
            }
        };
        tracing::info!(
            success = check.verdict.is_success(),
            mismatches = check.diff.mismatches(),
            "paragraph submitted"
        );
        Ok(self.last_check.insert(check))
    }
}

/// Domino page: the loaded tile store plus the fetch outcome
#[derive(Debug, Default)]
pub struct DominoesPage {
    state: LoadState<DominoStore, FetchError>,
}

impl DominoesPage {
    /// Page loaded from tiles already in hand
    #[must_use]
    pub fn with_tiles(tiles: Vec<Tile>) -> Self {
        Self {
            state: LoadState::Resolved(DominoStore::loaded(tiles)),
        }
    }

    /// Fetch the tile list and capture it as the original snapshot
    pub async fn load(&mut self, api: &dyn SelectionApi) {
        self.state = LoadState::Pending;
        self.state = api.domino_tiles().await.map(DominoStore::loaded).into();
        log_settled("dominoes", &self.state);
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &LoadState<DominoStore, FetchError> {
        &self.state
    }

    /// Current tiles; empty unless loaded
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        match self.state.data() {
            Some(store) => store.current(),
            None => &[],
        }
    }

    /// Current tiles in the `", "`-joined source format
    #[must_use]
    pub fn source(&self) -> String {
        join_tiles(self.tiles())
    }

    /// Apply `op`; a no-op returning `false` unless loaded
    pub fn apply(&mut self, op: &DominoOp) -> bool {
        match &mut self.state {
            LoadState::Resolved(store) => store.apply(op),
            _ => false,
        }
    }

    /// Set the pending remove field
    pub fn set_input(&mut self, value: impl Into<String>) {
        if let LoadState::Resolved(store) = &mut self.state {
            store.set_input(value);
        }
    }

    /// Remove tiles equal to the pending field, then clear it
    pub fn remove_input(&mut self) -> bool {
        match &mut self.state {
            LoadState::Resolved(store) => store.remove_input(),
            _ => false,
        }
    }
}

fn log_settled<T>(page: &'static str, state: &LoadState<T, FetchError>) {
    match state {
        LoadState::Resolved(_) => tracing::info!(page, "loaded"),
        LoadState::Failed(err) => tracing::warn!(page, error = %err, "load failed"),
        LoadState::Pending => {}
    }
}
