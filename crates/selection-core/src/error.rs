//! Error types for selection core
//!
//! Covers the two places where plain input can be rejected:
//! - Tile text that is not `<int>-<int>`
//! - Retyped paragraphs that fail field validation

/// Minimum length, in characters, of a retyped paragraph
pub const MIN_PARAGRAPH_LEN: usize = 10;

/// Errors while parsing a domino tile
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileParseError {
    /// Token has no `-` separator
    #[error("tile '{0}' is missing the '-' separator")]
    MissingSeparator(String),

    /// One of the faces is not an unsigned integer
    #[error("tile '{tile}' has a non-numeric face '{face}'")]
    InvalidFace { tile: String, face: String },
}

impl TileParseError {
    /// Create invalid face error
    pub fn invalid_face(tile: impl Into<String>, face: impl Into<String>) -> Self {
        Self::InvalidFace {
            tile: tile.into(),
            face: face.into(),
        }
    }
}

/// Field-level validation errors for a retyped paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Nothing was typed
    #[error("Paragraph is required")]
    Required,

    /// Typed text is shorter than [`MIN_PARAGRAPH_LEN`]
    #[error("Paragraph must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },
}

impl ValidationError {
    /// Name of the form field the error belongs to
    #[inline]
    #[must_use]
    pub fn field(&self) -> &'static str {
        "paragraph"
    }
}

/// Combined core error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("tile error: {0}")]
    Tile(#[from] TileParseError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_form_copy() {
        assert_eq!(ValidationError::Required.to_string(), "Paragraph is required");
        let err = ValidationError::TooShort { min: MIN_PARAGRAPH_LEN, actual: 3 };
        assert_eq!(
            err.to_string(),
            "Paragraph must be at least 10 characters long"
        );
        assert_eq!(err.field(), "paragraph");
    }

    #[test]
    fn tile_error_display() {
        let err = TileParseError::invalid_face("x-1", "x");
        assert_eq!(err.to_string(), "tile 'x-1' has a non-numeric face 'x'");
    }

    #[test]
    fn error_conversions() {
        let err: CoreError = TileParseError::MissingSeparator("12".into()).into();
        assert!(matches!(err, CoreError::Tile(_)));

        let err: CoreError = ValidationError::Required.into();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
