//! Client configuration
//!
//! Defaults point at the public services. A TOML file may override any
//! subset; missing sections keep their defaults. An endpoint section replaces
//! that endpoint entirely, headers included.
//!
//! ```toml
//! timeout_secs = 10
//!
//! [random_strings]
//! count = 10
//! length = 32
//!
//! [random_strings.endpoint]
//! url = "https://www.random.org/strings/"
//!
//! [dominoes]
//! url = "https://pwd-selectiontest-api.vercel.app/domino/array-type-two"
//! headers = { auth = "JCwd" }
//! ```

use crate::error::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_RANDOM_STRINGS_URL: &str = "https://www.random.org/strings/";
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_PARAGRAPH_URL: &str =
    "https://pwd-selectiontest-api.vercel.app/alphabets/paragraph";
pub const DEFAULT_DOMINOES_URL: &str =
    "https://pwd-selectiontest-api.vercel.app/domino/array-type-two";

/// One GET endpoint: URL plus extra request headers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

impl Endpoint {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    fn validate(&self, endpoint: &'static str) -> Result<(), ConfigError> {
        Url::parse(&self.url).map_err(|_| ConfigError::InvalidUrl {
            endpoint,
            url: self.url.clone(),
        })?;
        for (name, value) in &self.headers {
            let valid = HeaderName::from_bytes(name.as_bytes()).is_ok()
                && HeaderValue::from_str(value).is_ok();
            if !valid {
                return Err(ConfigError::InvalidHeader {
                    endpoint,
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Random-string service: endpoint plus batch shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomStringsConfig {
    pub endpoint: Endpoint,
    /// Strings per batch
    pub count: u32,
    /// Characters per string
    pub length: u32,
}

impl Default for RandomStringsConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::new(DEFAULT_RANDOM_STRINGS_URL),
            count: 10,
            length: 32,
        }
    }
}

/// Selection client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub random_strings: RandomStringsConfig,
    pub users: Endpoint,
    pub paragraph: Endpoint,
    pub dominoes: Endpoint,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        tracing::debug!(path = %path.display(), "loading client config");
        Self::from_toml_str(&text)
    }

    /// Point every endpoint at `base`, keeping each path
    ///
    /// Useful for local fixtures: `http://127.0.0.1:8080` turns
    /// `https://host/users` into `http://127.0.0.1:8080/users`. A path on
    /// `base` is kept as a prefix, so `http://127.0.0.1:8080/api/` gives
    /// `http://127.0.0.1:8080/api/users`.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base).map_err(|_| ConfigError::InvalidUrl {
            endpoint: "base",
            url: base.to_string(),
        })?;
        for (name, endpoint) in [
            ("random_strings", &mut self.random_strings.endpoint),
            ("users", &mut self.users),
            ("paragraph", &mut self.paragraph),
            ("dominoes", &mut self.dominoes),
        ] {
            let current = Url::parse(&endpoint.url).map_err(|_| ConfigError::InvalidUrl {
                endpoint: name,
                url: endpoint.url.clone(),
            })?;
            let mut rebased = base_url.clone();
            let prefix = base_url.path().trim_end_matches('/');
            rebased.set_path(&format!("{prefix}{}", current.path()));
            endpoint.url = rebased.to_string();
        }
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_random_strings(mut self, count: u32, length: u32) -> Self {
        self.random_strings.count = count;
        self.random_strings.length = length;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_dominoes(mut self, endpoint: Endpoint) -> Self {
        self.dominoes = endpoint;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_paragraph(mut self, endpoint: Endpoint) -> Self {
        self.paragraph = endpoint;
        self
    }

    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check URLs, headers and ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.random_strings.endpoint.validate("random_strings")?;
        self.users.validate("users")?;
        self.paragraph.validate("paragraph")?;
        self.dominoes.validate("dominoes")?;

        if self.random_strings.count == 0 || self.random_strings.length == 0 {
            return Err(ConfigError::Invalid(
                "random_strings.count and random_strings.length must be positive".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            random_strings: RandomStringsConfig::default(),
            users: Endpoint::new(DEFAULT_USERS_URL),
            paragraph: Endpoint::new(DEFAULT_PARAGRAPH_URL),
            dominoes: Endpoint::new(DEFAULT_DOMINOES_URL).with_header("auth", "JCwd"),
            timeout_secs: 30,
            user_agent: concat!("selection/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
