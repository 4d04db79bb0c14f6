//! Provider configuration
//!
//! Explicit, caller-constructed configuration. Nothing here reads the
//! environment: the binary decides where keys come from and injects
//! them at construction time.

use std::time::Duration;

/// Default Gemini model name
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Tavily REST endpoint
pub const DEFAULT_TAVILY_ENDPOINT: &str = "https://api.tavily.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the Gemini chat model client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key
    pub api_key: String,
    /// Model name, e.g. `gemini-2.5-flash`
    pub model: String,
    /// Base endpoint; overridable for tests
    pub endpoint: String,
    /// Per-call timeout; a call exceeding it fails rather than hanging
    /// the pipeline
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create a config with default model, endpoint and timeout
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the model name
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the base endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the per-call timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Configuration for the Tavily search client
#[derive(Debug, Clone)]
pub struct TavilyConfig {
    /// API key
    pub api_key: String,
    /// Base endpoint; overridable for tests
    pub endpoint: String,
    /// Per-call timeout
    pub timeout: Duration,
}

impl TavilyConfig {
    /// Create a config with default endpoint and timeout
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_TAVILY_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the base endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the per-call timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
