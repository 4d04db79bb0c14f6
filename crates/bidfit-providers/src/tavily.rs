//! Tavily search client
//!
//! One POST per query against `/search`, requesting full document
//! bodies (`include_raw_content`). Hits come back in provider rank
//! order and are passed through untouched.

use crate::config::TavilyConfig;
use crate::error::ProviderError;
use crate::search::{SearchHit, SearchProvider};
use serde::Deserialize;
use serde_json::json;

/// Tavily implementation of [`SearchProvider`]
pub struct TavilyClient {
    config: TavilyConfig,
    client: reqwest::Client,
}

impl TavilyClient {
    /// Create a client from explicit configuration
    pub fn new(config: TavilyConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Unreachable(e.to_string()))?;
        Ok(Self { config, client })
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    url: Option<String>,
    raw_content: Option<String>,
    score: Option<f64>,
}

impl From<SearchResult> for SearchHit {
    fn from(result: SearchResult) -> Self {
        Self {
            url: result.url,
            raw_content: result.raw_content,
            score: result.score,
        }
    }
}

#[async_trait::async_trait]
impl SearchProvider for TavilyClient {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let url = format!("{}/search", self.config.endpoint);
        let body = json!({
            "api_key": self.config.api_key,
            "query": query,
            "max_results": max_results,
            "search_depth": "basic",
            "include_raw_content": true,
        });

        tracing::debug!(query, max_results, "issuing search query");
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed.results.into_iter().map(SearchHit::from).collect())
    }
}
