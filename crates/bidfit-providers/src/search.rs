//! Search provider seam

use crate::error::ProviderError;

/// One ranked search result
///
/// Fields stay optional at this layer: the provider reports what it
/// got, and the consuming step decides whether a missing body or URL
/// is a hard failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHit {
    /// Source URL
    pub url: Option<String>,
    /// Full document body
    pub raw_content: Option<String>,
    /// Provider relevance score, if reported
    pub score: Option<f64>,
}

/// An external ranked-document search capability
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Issue one query, returning at most `max_results` hits in
    /// provider rank order
    ///
    /// An empty result set is a valid answer, not an error.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchHit>, ProviderError>;
}
