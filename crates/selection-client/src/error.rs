//! Error types for the selection client
//!
//! Fetch failures fall into two kinds, see [`ErrorKind`]:
//! - Network: the request failed or the response status was not 2xx
//! - Unknown: anything else, such as a body that does not decode

use std::path::PathBuf;

/// Coarse classification shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-success status
    Network,
    /// Catch-all
    Unknown,
}

/// Errors while fetching page data
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Response arrived with a non-success status
    #[error("Network response was not ok (status {status} from {url})")]
    NotOk { url: String, status: u16 },

    /// Request never produced a response
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body did not match the expected shape
    #[error("malformed response from {url}: {message}")]
    Malformed { url: String, message: String },

    /// Envelope reported an error of its own
    #[error("{url} rejected the request: {message}")]
    Rejected { url: String, message: String },
}

impl FetchError {
    /// Create malformed-body error
    pub fn malformed(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Malformed {
            url: url.into(),
            message: message.to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOk { .. } | Self::Transport { .. } => ErrorKind::Network,
            Self::Malformed { .. } | Self::Rejected { .. } => ErrorKind::Unknown,
        }
    }

    /// Inline message for the page
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotOk { .. } => "Network response was not ok".to_string(),
            Self::Transport { source, .. } => source.to_string(),
            Self::Malformed { .. } | Self::Rejected { .. } => {
                "An unknown error occurred".to_string()
            }
        }
    }
}

/// Errors while loading or validating [`ClientConfig`](crate::config::ClientConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for the config schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Endpoint URL does not parse
    #[error("invalid url for {endpoint}: '{url}'")]
    InvalidUrl { endpoint: &'static str, url: String },

    /// Header name or value cannot be sent
    #[error("invalid header '{name}' for {endpoint}")]
    InvalidHeader { endpoint: &'static str, name: String },

    /// Value out of range
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// HTTP client could not be built
    #[error("http client setup failed: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for fetches
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ok_is_network_kind() {
        let err = FetchError::NotOk {
            url: "http://x".into(),
            status: 503,
        };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.user_message(), "Network response was not ok");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn malformed_is_unknown_kind() {
        let err = FetchError::malformed("http://x", "missing field `data`");
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.user_message(), "An unknown error occurred");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidUrl {
            endpoint: "users",
            url: "::".into(),
        };
        assert_eq!(err.to_string(), "invalid url for users: '::'");
    }
}
