mod fence;
mod prompt;
mod types;

pub use fence::strip_code_fence;
pub use prompt::SYSTEM_PROMPT;
pub use types::*;

use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{AnthropicClient, LlmClient},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Forwards a single query to the model and returns its parsed JSON answer.
///
/// Stateless between calls: every query is one upstream request and nothing
/// is retried or cached.
pub struct Relay {
    client: Arc<dyn LlmClient>,
    system_prompt: String,
}

impl Relay {
    pub fn new(client: Arc<dyn LlmClient>, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
        }
    }

    /// Builds a relay backed by [`AnthropicClient`], using the configured
    /// system prompt override if there is one.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let client = AnthropicClient::new(config)?;
        let system_prompt = config
            .system_prompt
            .clone()
            .unwrap_or_else(|| SYSTEM_PROMPT.to_string());
        Ok(Self::new(Arc::new(client), system_prompt))
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub async fn handle_query(&self, query: &str) -> Result<Value> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Rejecting empty query");
            return Err(Error::InvalidInput);
        }

        info!(query_len = query.len(), "Forwarding query upstream");

        let raw = self
            .client
            .complete(&self.system_prompt, query)
            .await
            .inspect_err(|e| warn!("Upstream call failed: {}", e))?;

        parse_model_text(&raw)
    }
}

/// Strips code fences from the model's text and parses what is left as JSON.
pub fn parse_model_text(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fence(raw);
    serde_json::from_str(cleaned).map_err(|e| {
        warn!(
            "Model response is not valid JSON ({}), {} bytes",
            e,
            cleaned.len()
        );
        Error::UnparsableResponse
    })
}
