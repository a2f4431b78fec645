//! JSON gateway abstraction.

use async_trait::async_trait;

use crate::error::GatewayError;

/// Issues JSON POST requests against the chart engine.
///
/// Every call is a single attempt: no retry, no timeout, no backoff.
#[async_trait]
pub trait JsonGateway: Send + Sync {
    /// POST `body` as JSON to `url` and return the decoded JSON response.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Http` carrying the raw body text for a
    /// non-success status, `GatewayError::Decode` when a success body is not
    /// valid JSON, and `GatewayError::Network` when no response arrived.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError>;
}
