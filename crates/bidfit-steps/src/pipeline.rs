//! Standard pipeline wiring
//!
//! Assembles the four concrete steps over the standard topology. The
//! same chat model backs extraction, summarization, and scoring; the
//! search provider backs research.

use crate::extract::ExtractStep;
use crate::research::ResearchStep;
use crate::score::ScoreStep;
use crate::summarize::SummarizeStep;
use bidfit_core::{PipelineExecutor, StepGraph};
use bidfit_providers::{ChatModel, SearchProvider};
use std::sync::Arc;

/// Build the standard evaluation pipeline
#[must_use]
pub fn standard_pipeline(
    model: Arc<dyn ChatModel>,
    search: Arc<dyn SearchProvider>,
    max_results: usize,
) -> PipelineExecutor {
    PipelineExecutor::new(StepGraph::standard())
        .with_step(Arc::new(ExtractStep::new(Arc::clone(&model))))
        .with_step(Arc::new(ResearchStep::new(search, max_results)))
        .with_step(Arc::new(SummarizeStep::new(Arc::clone(&model))))
        .with_step(Arc::new(ScoreStep::new(model)))
}
