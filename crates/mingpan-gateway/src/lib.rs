//! HTTP implementation of the `JsonGateway` trait.

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, instrument};

use mingpan_core::error::GatewayError;
use mingpan_core::gateway::JsonGateway;

/// Invalid gateway configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The engine base URL could not be parsed.
    #[error("invalid engine url `{url}`: {reason}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Parser message.
        reason: String,
    },
}

/// Where the chart engine lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL that endpoint paths are resolved against.
    pub base_url: Url,
}

impl GatewayConfig {
    /// Parses `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` is not an absolute URL.
    pub fn parse(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { base_url })
    }
}

/// `reqwest`-backed gateway. Single attempt per call: no retry, no timeout.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Creates a gateway for the configured engine.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    /// Resolves an endpoint path (or absolute URL) against the base URL.
    fn resolve(&self, url: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(url)
            .map_err(|e| GatewayError::Network(format!("invalid endpoint `{url}`: {e}")))
    }
}

#[async_trait]
impl JsonGateway for HttpGateway {
    #[instrument(skip(self, body))]
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let target = self.resolve(url)?;
        let response = self
            .client
            .post(target)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "engine responded");
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
