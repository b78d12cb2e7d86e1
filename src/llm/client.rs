use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

const MESSAGES_PATH: &str = "/v1/messages";

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `system` plus a single user message and returns the raw text of
    /// the model's first text block.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Client for the Anthropic Messages API.
///
/// Holds no per-request state; one instance is shared across all inbound
/// requests. A missing credential is reported as [`Error::Misconfigured`] on
/// each call, before anything goes over the wire.
pub struct AnthropicClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    api_version: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: format!("{}{}", config.base_url.trim_end_matches('/'), MESSAGES_PATH),
            api_key: config.api_key().map(str::to_string),
            api_version: config.api_version.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(Error::Misconfigured)?;

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: vec![Message::user(user)],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!("Upstream responded with status {}", status);
        check_status(status)?;

        let body: MessagesResponse = response.json().await.map_err(map_body_error)?;

        body.first_text()
            .map(str::to_string)
            .ok_or_else(|| Error::upstream(None, "response contained no text block"))
    }
}

/// Maps an upstream HTTP status onto the relay's error kinds.
pub fn check_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED {
        Err(Error::UpstreamAuth)
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        Err(Error::RateLimited)
    } else if status.is_success() {
        Ok(())
    } else {
        Err(Error::upstream(
            Some(status.as_u16()),
            status.canonical_reason().unwrap_or("unknown status"),
        ))
    }
}

// The client timeout also covers reading the body.
fn map_body_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        warn!("Upstream returned an unexpected payload: {}", e);
        Error::upstream(None, "unexpected response payload")
    }
}

fn map_transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        warn!("Upstream request failed: {}", e);
        Error::upstream(None, "upstream request failed")
    }
}
