//! Submission Sink
//!
//! External destination for the assembled payload. The session layer
//! dispatches deliveries on a detached task and only logs the outcome:
//! a lead-capture flow must never stall or error out on network
//! conditions outside its control. The accepted cost is silent data
//! loss when the sink is down, which is why failures are at least
//! logged with the full context.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("webhook transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn deliver(&self, payload: &serde_json::Value) -> Result<(), SinkError>;
}

/// Acknowledgement body the webhook responds with. Read purely for the
/// diagnostic log line; navigation never depends on it.
#[derive(Debug, Deserialize)]
struct WebhookAck {
    result: String,
    #[serde(default)]
    error: Option<String>,
}

/// Posts the payload as JSON to a webhook endpoint (the spreadsheet
/// bridge in the baseline deployment).
pub struct WebhookSink {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubmissionSink for WebhookSink {
    async fn deliver(&self, payload: &serde_json::Value) -> Result<(), SinkError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        match response.json::<WebhookAck>().await {
            Ok(ack) if ack.result == "success" => {
                debug!(%status, "webhook accepted submission");
            }
            Ok(ack) => {
                warn!(%status, error = ?ack.error, "webhook reported an error");
            }
            Err(err) => {
                // Opaque/cross-origin responses are expected here.
                debug!(%status, %err, "webhook response body not readable");
            }
        }
        Ok(())
    }
}

/// Sink for tests and offline runs: logs the payload and succeeds.
#[derive(Debug, Default)]
pub struct NullSink;

#[async_trait]
impl SubmissionSink for NullSink {
    async fn deliver(&self, payload: &serde_json::Value) -> Result<(), SinkError> {
        debug!(keys = payload.as_object().map(|o| o.len()).unwrap_or(0), "null sink swallowed submission");
        Ok(())
    }
}
