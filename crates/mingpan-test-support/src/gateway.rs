//! Test gateways — fake `JsonGateway` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use mingpan_core::error::GatewayError;
use mingpan_core::gateway::JsonGateway;
use serde_json::Value;
use tokio::sync::Notify;

type Scripted = Mutex<VecDeque<Result<Value, GatewayError>>>;

fn next_response(responses: &Scripted) -> Result<Value, GatewayError> {
    responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(GatewayError::Network("no scripted response left".into())))
}

/// A gateway that records every call and answers from a scripted queue.
///
/// Once the queue is exhausted every call fails with a network error.
#[derive(Debug)]
pub struct RecordingGateway {
    responses: Scripted,
    calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingGateway {
    /// Create a gateway that returns `responses` in order, one per call.
    #[must_use]
    pub fn new(responses: Vec<Result<Value, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all `(url, body)` pairs posted so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonGateway for RecordingGateway {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_owned(), body.clone()));
        next_response(&self.responses)
    }
}

#[derive(Debug, Clone)]
enum Failure {
    Http { status: u16, body: String },
    Decode,
    Network(String),
}

/// A gateway that fails every call the same way. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingGateway {
    failure: Failure,
    calls: Mutex<usize>,
}

impl FailingGateway {
    fn with(failure: Failure) -> Self {
        Self {
            failure,
            calls: Mutex::new(0),
        }
    }

    /// Fails with a non-success status and the given body text.
    #[must_use]
    pub fn http(status: u16, body: &str) -> Self {
        Self::with(Failure::Http {
            status,
            body: body.to_owned(),
        })
    }

    /// Fails as if a success response carried malformed JSON.
    #[must_use]
    pub fn malformed_json() -> Self {
        Self::with(Failure::Decode)
    }

    /// Fails as if the engine were unreachable.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::with(Failure::Network("connection refused".to_owned()))
    }

    /// Number of calls made so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl JsonGateway for FailingGateway {
    async fn post_json(&self, _url: &str, _body: &Value) -> Result<Value, GatewayError> {
        *self.calls.lock().unwrap() += 1;
        Err(match &self.failure {
            Failure::Http { status, body } => GatewayError::Http {
                status: *status,
                body: body.clone(),
            },
            Failure::Decode => serde_json::from_str::<Value>("{not json")
                .expect_err("fixture is malformed on purpose")
                .into(),
            Failure::Network(message) => GatewayError::Network(message.clone()),
        })
    }
}

/// A gateway that holds every call open until the test releases it.
///
/// Used to interleave user actions with an in-flight request on a
/// single-threaded executor.
#[derive(Debug)]
pub struct GatedGateway {
    responses: Scripted,
    calls: Mutex<Vec<(String, Value)>>,
    entered: Notify,
    release: Notify,
}

impl GatedGateway {
    /// Create a gated gateway answering from `responses` in order.
    #[must_use]
    pub fn new(responses: Vec<Result<Value, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Resolves once a call has reached the gateway and is waiting.
    pub async fn wait_for_call(&self) {
        self.entered.notified().await;
    }

    /// Lets one waiting call complete.
    pub fn release(&self) {
        self.release.notify_one();
    }

    /// Returns a snapshot of all `(url, body)` pairs posted so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonGateway for GatedGateway {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_owned(), body.clone()));
        self.entered.notify_one();
        self.release.notified().await;
        next_response(&self.responses)
    }
}
