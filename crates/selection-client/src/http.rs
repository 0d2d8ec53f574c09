//! reqwest-backed [`SelectionApi`]

use crate::api::SelectionApi;
use crate::config::{ClientConfig, Endpoint};
use crate::error::{ConfigError, FetchError, FetchResult};
use crate::models::{DominoEnvelope, ParagraphEnvelope, User};
use async_trait::async_trait;
use selection_core::domino::parse_tiles;
use selection_core::letters::split_plain_lines;
use selection_core::Tile;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// HTTP client for the selection services
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl HttpClient {
    /// Build a client from validated configuration
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `endpoint` and return the body of a 2xx response
    async fn get_text(&self, endpoint: &Endpoint, query: &[(&str, String)]) -> FetchResult<String> {
        let url = endpoint.url.as_str();
        tracing::info!(url, "fetching");

        let mut request = self.http.get(url).query(query);
        for (name, value) in &endpoint.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|source| {
            tracing::error!(url, error = %source, "request failed");
            FetchError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "response not ok");
            return Err(FetchError::NotOk {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!(url, bytes = body.len(), "response received");
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> FetchResult<T> {
        let body = self.get_text(endpoint, &[]).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(url = %endpoint.url, error = %e, "malformed json");
            FetchError::malformed(&endpoint.url, e)
        })
    }
}

#[async_trait]
impl SelectionApi for HttpClient {
    async fn random_strings(&self) -> FetchResult<Vec<String>> {
        let cfg = &self.config.random_strings;
        let query = [
            ("num", cfg.count.to_string()),
            ("len", cfg.length.to_string()),
            ("upperalpha", "on".to_string()),
            ("unique", "off".to_string()),
            ("format", "plain".to_string()),
        ];
        let body = self.get_text(&cfg.endpoint, &query).await?;
        Ok(split_plain_lines(&body))
    }

    async fn users(&self) -> FetchResult<Vec<User>> {
        self.get_json(&self.config.users).await
    }

    async fn paragraph(&self) -> FetchResult<String> {
        let endpoint = &self.config.paragraph;
        let envelope: ParagraphEnvelope = self.get_json(endpoint).await?;
        envelope
            .into_text()
            .ok_or_else(|| FetchError::malformed(&endpoint.url, "missing data.paragraph.text"))
    }

    async fn domino_tiles(&self) -> FetchResult<Vec<Tile>> {
        let endpoint = &self.config.dominoes;
        let envelope: DominoEnvelope = self.get_json(endpoint).await?;
        if envelope.error {
            return Err(FetchError::Rejected {
                url: endpoint.url.clone(),
                message: envelope.message,
            });
        }
        parse_tiles(&envelope.data.number.type_two)
            .map_err(|e| FetchError::malformed(&endpoint.url, e))
    }
}
