//! Research step
//!
//! Issues exactly one search query for the company name and projects
//! each ranked hit down to (document body, URL), preserving provider
//! rank order. No local re-ranking, no relevance filtering. Zero hits
//! is a valid outcome and yields empty sequences.

use bidfit_core::{PipelineError, SharedContext, Step, StepId, StepOutput};
use bidfit_providers::SearchProvider;
use std::sync::Arc;

/// Default bound on ranked results per query
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// The research step
pub struct ResearchStep {
    search: Arc<dyn SearchProvider>,
    max_results: usize,
}

impl ResearchStep {
    #[must_use]
    pub fn new(search: Arc<dyn SearchProvider>, max_results: usize) -> Self {
        Self {
            search,
            max_results,
        }
    }
}

#[async_trait::async_trait]
impl Step for ResearchStep {
    fn id(&self) -> StepId {
        StepId::Research
    }

    async fn run(&self, ctx: &SharedContext) -> Result<StepOutput, PipelineError> {
        let hits = self
            .search
            .search(ctx.company_name(), self.max_results)
            .await
            .map_err(|e| PipelineError::SearchUnavailable(e.to_string()))?;

        let mut raw_documents = Vec::with_capacity(hits.len());
        let mut source_urls = Vec::with_capacity(hits.len());
        for (rank, hit) in hits.into_iter().enumerate() {
            let url = hit
                .url
                .filter(|u| !u.trim().is_empty())
                .ok_or(PipelineError::MalformedResult {
                    rank,
                    missing: "url",
                })?;
            let body = hit
                .raw_content
                .filter(|b| !b.trim().is_empty())
                .ok_or(PipelineError::MalformedResult {
                    rank,
                    missing: "document body",
                })?;
            source_urls.push(url);
            raw_documents.push(body);
        }

        tracing::info!(
            company = ctx.company_name(),
            documents = raw_documents.len(),
            "research complete"
        );
        Ok(StepOutput::Research {
            raw_documents,
            source_urls,
        })
    }
}
