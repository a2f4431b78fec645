//! Error types shared across the wizard.

use thiserror::Error;

/// Failure of a single JSON POST through a [`JsonGateway`](crate::gateway::JsonGateway).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The server answered with a non-success status.
    #[error("{}", http_message(.status, .body))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, never parsed.
        body: String,
    },

    /// A success response whose body is not valid JSON.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The request did not produce a response at all.
    #[error("network error: {0}")]
    Network(String),
}

fn http_message(status: impl std::fmt::Display, body: &str) -> String {
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_owned()
    }
}

/// Top-level error type for wizard actions.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The response was valid JSON but not the payload shape we render.
    #[error("unexpected payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// A result was requested before any chart session exists.
    #[error("no active session")]
    MissingSession,
}
