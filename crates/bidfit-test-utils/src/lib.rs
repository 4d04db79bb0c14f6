//! Scripted provider mocks for bidfit tests
//!
//! Deterministic stand-ins for the two capability seams. Responses
//! are queued up front and popped per call; every instruction/query
//! is recorded so tests can assert on prompt content. Queue underflow
//! panics: a test that makes more calls than it scripted is wrong.

use bidfit_providers::{ChatModel, ProviderError, SearchHit, SearchProvider};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;

/// Scripted [`ChatModel`]
///
/// Prose and structured responses live in separate queues because the
/// two call kinds are distinct in the real providers too.
#[derive(Debug, Default)]
pub struct ScriptedModel {
    prose: Mutex<VecDeque<Result<String, String>>>,
    structured: Mutex<VecDeque<Result<Value, String>>>,
    instructions: Mutex<Vec<String>>,
}

impl ScriptedModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a prose response
    #[must_use]
    pub fn with_prose(self, response: impl Into<String>) -> Self {
        self.prose.lock().push_back(Ok(response.into()));
        self
    }

    /// Queue a prose-call failure
    #[must_use]
    pub fn with_prose_failure(self, message: impl Into<String>) -> Self {
        self.prose.lock().push_back(Err(message.into()));
        self
    }

    /// Queue a structured response
    #[must_use]
    pub fn with_structured(self, response: Value) -> Self {
        self.structured.lock().push_back(Ok(response));
        self
    }

    /// Queue a structured-call failure
    #[must_use]
    pub fn with_structured_failure(self, message: impl Into<String>) -> Self {
        self.structured.lock().push_back(Err(message.into()));
        self
    }

    /// Every instruction the model has been invoked with, in order
    #[must_use]
    pub fn instructions(&self) -> Vec<String> {
        self.instructions.lock().clone()
    }
}

#[async_trait::async_trait]
impl ChatModel for ScriptedModel {
    async fn generate(&self, instruction: &str) -> Result<String, ProviderError> {
        self.instructions.lock().push(instruction.to_string());
        self.prose
            .lock()
            .pop_front()
            .expect("scripted model ran out of prose responses")
            .map_err(|msg| ProviderError::Http {
                status: 500,
                body: msg,
            })
    }

    async fn generate_structured(
        &self,
        instruction: &str,
        _schema: Value,
    ) -> Result<Value, ProviderError> {
        self.instructions.lock().push(instruction.to_string());
        self.structured
            .lock()
            .pop_front()
            .expect("scripted model ran out of structured responses")
            .map_err(|msg| ProviderError::Http {
                status: 500,
                body: msg,
            })
    }
}

/// Scripted [`SearchProvider`]
#[derive(Debug, Default)]
pub struct ScriptedSearch {
    responses: Mutex<VecDeque<Result<Vec<SearchHit>, String>>>,
    queries: Mutex<Vec<(String, usize)>>,
}

impl ScriptedSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result set
    #[must_use]
    pub fn with_hits(self, hits: Vec<SearchHit>) -> Self {
        self.responses.lock().push_back(Ok(hits));
        self
    }

    /// Queue an unreachable-provider failure
    #[must_use]
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.responses.lock().push_back(Err(message.into()));
        self
    }

    /// Every (query, max_results) pair issued, in order
    #[must_use]
    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().clone()
    }
}

#[async_trait::async_trait]
impl SearchProvider for ScriptedSearch {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        self.queries.lock().push((query.to_string(), max_results));
        self.responses
            .lock()
            .pop_front()
            .expect("scripted search ran out of responses")
            .map_err(ProviderError::Unreachable)
    }
}

/// A complete, well-formed hit for happy-path scripts
#[must_use]
pub fn hit(url: &str, body: &str, score: f64) -> SearchHit {
    SearchHit {
        url: Some(url.to_string()),
        raw_content: Some(body.to_string()),
        score: Some(score),
    }
}
