use async_trait::async_trait;
use cadalytics_relay::{Error, Result, llm::LlmClient};
use std::sync::{Arc, Mutex};

/// A recorded `complete` call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

/// Mock LLM client that replays canned outcomes and records every call.
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<Result<String>>>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(text.into()));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::upstream(None, "no mock response queued"));
        }
        responses.remove(0)
    }
}
