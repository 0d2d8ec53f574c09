//! Selection Core
//!
//! Pure transforms behind the selection pages:
//! - Letter frequency counts over batches of random uppercase strings
//! - Character-by-character comparison of a retyped paragraph
//! - Domino tile sequences: sort, flip, dedupe, remove, reset
//!
//! Nothing here performs I/O. Fetching lives in `selection-client`.
//!
//! # Example
//!
//! ```rust
//! use selection_core::domino::{parse_tiles, DominoOp, DominoStore};
//!
//! let mut store = DominoStore::loaded(parse_tiles("6-6, 1-2, 3-1").unwrap());
//! store.apply(&DominoOp::SortAscending);
//! assert_eq!(selection_core::domino::join_tiles(store.current()), "1-2, 3-1, 6-6");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod domino;
pub mod error;
pub mod letters;
pub mod paragraph;
pub mod state;

// Re-exports for convenience
pub use domino::{DominoOp, DominoSnapshot, DominoStore, Tile, UnknownOp};
pub use error::{CoreError, CoreResult, TileParseError, ValidationError, MIN_PARAGRAPH_LEN};
pub use letters::LetterCounts;
pub use paragraph::{DiffLine, DiffResult, Outcome, ParagraphCheck, Verdict};
pub use state::LoadState;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with selection core
    pub use crate::{
        DiffResult, DominoOp, DominoStore, LetterCounts, LoadState, Outcome, ParagraphCheck, Tile,
        Verdict,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
