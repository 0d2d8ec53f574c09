//! Load state for data fetched once per view

use serde::Serialize;

/// Outcome of a page's data fetch
///
/// A view starts `Pending` and settles exactly once into `Resolved` or
/// `Failed`. A refetch starts over from `Pending`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum LoadState<T, E> {
    Pending,
    Resolved(T),
    Failed(E),
}

impl<T, E> LoadState<T, E> {
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Resolved(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Transform resolved data, keeping pending/failed as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U, E> {
        match self {
            Self::Pending => LoadState::Pending,
            Self::Resolved(data) => LoadState::Resolved(f(data)),
            Self::Failed(err) => LoadState::Failed(err),
        }
    }

    /// Convert a settled state into a `Result`; `None` while pending
    pub fn into_result(self) -> Option<Result<T, E>> {
        match self {
            Self::Pending => None,
            Self::Resolved(data) => Some(Ok(data)),
            Self::Failed(err) => Some(Err(err)),
        }
    }
}

impl<T, E> Default for LoadState<T, E> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T, E> From<Result<T, E>> for LoadState<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(data) => Self::Resolved(data),
            Err(err) => Self::Failed(err),
        }
    }
}
