//! Shared context: the accumulating record passed between steps
//!
//! Every field has exactly one writer and is never overwritten. Steps
//! read through the typed accessors and return a
//! [`StepOutput`](crate::types::StepOutput); only the executor merges
//! outputs back in, after the producing step has fully completed. That
//! single-writer discipline is what makes the context race-free
//! without any interior locking.

use crate::error::PipelineError;
use crate::types::{EvaluationResult, RunId, StepId, StepOutput, StructuredRequirements};

/// Evolving per-invocation state
///
/// Lifecycle: create with the two input fields, populate incrementally
/// as steps complete, read the terminal field, discard. There is no
/// deletion and no overwrite.
#[derive(Debug, Clone)]
pub struct SharedContext {
    run_id: RunId,
    requirements_text: String,
    company_name: String,
    structured_requirements: Option<StructuredRequirements>,
    raw_documents: Option<Vec<String>>,
    source_urls: Option<Vec<String>>,
    research_summary: Option<String>,
    evaluation_result: Option<EvaluationResult>,
}

impl SharedContext {
    /// Create a context for one invocation
    ///
    /// Both inputs are required non-empty; whitespace-only counts as
    /// empty.
    pub fn new(
        requirements_text: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Result<Self, PipelineError> {
        let requirements_text = requirements_text.into();
        let company_name = company_name.into();
        if requirements_text.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "requirements_text must be non-empty".to_string(),
            ));
        }
        if company_name.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "company_name must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            run_id: RunId::new(),
            requirements_text,
            company_name,
            structured_requirements: None,
            raw_documents: None,
            source_urls: None,
            research_summary: None,
            evaluation_result: None,
        })
    }

    /// Identifier of this invocation, minted at creation
    #[inline]
    #[must_use]
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Original free-text requirements (input, immutable)
    #[inline]
    #[must_use]
    pub fn requirements_text(&self) -> &str {
        &self.requirements_text
    }

    /// Company under evaluation (input, immutable)
    #[inline]
    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Structured requirements, populated by the extraction step
    pub fn structured_requirements(
        &self,
        reader: StepId,
    ) -> Result<&StructuredRequirements, PipelineError> {
        self.structured_requirements
            .as_ref()
            .ok_or(PipelineError::DependencyNotReady {
                step: reader,
                field: "structured_requirements",
            })
    }

    /// Raw research documents, populated by the research step
    pub fn raw_documents(&self, reader: StepId) -> Result<&[String], PipelineError> {
        self.raw_documents
            .as_deref()
            .ok_or(PipelineError::DependencyNotReady {
                step: reader,
                field: "raw_documents",
            })
    }

    /// Source URLs, positionally correlated with [`Self::raw_documents`]
    pub fn source_urls(&self, reader: StepId) -> Result<&[String], PipelineError> {
        self.source_urls
            .as_deref()
            .ok_or(PipelineError::DependencyNotReady {
                step: reader,
                field: "source_urls",
            })
    }

    /// Research summary, populated by the summarization step
    pub fn research_summary(&self, reader: StepId) -> Result<&str, PipelineError> {
        self.research_summary
            .as_deref()
            .ok_or(PipelineError::DependencyNotReady {
                step: reader,
                field: "research_summary",
            })
    }

    /// Terminal evaluation, populated by the scoring step
    #[must_use]
    pub fn evaluation_result(&self) -> Option<&EvaluationResult> {
        self.evaluation_result.as_ref()
    }

    /// Consume the context, yielding the terminal evaluation
    pub fn into_evaluation(self) -> Result<EvaluationResult, PipelineError> {
        self.evaluation_result
            .ok_or(PipelineError::DependencyNotReady {
                step: StepId::Score,
                field: "evaluation_result",
            })
    }

    /// Merge a completed step's output into the context
    ///
    /// Writing a field twice is a topology bug, not a runtime
    /// condition, so it asserts rather than returning an error.
    pub fn merge(&mut self, output: StepOutput) {
        match output {
            StepOutput::Requirements(req) => {
                assert!(
                    self.structured_requirements.is_none(),
                    "structured_requirements written twice"
                );
                self.structured_requirements = Some(req);
            }
            StepOutput::Research {
                raw_documents,
                source_urls,
            } => {
                assert!(self.raw_documents.is_none(), "raw_documents written twice");
                assert_eq!(
                    raw_documents.len(),
                    source_urls.len(),
                    "raw_documents and source_urls must stay positionally correlated"
                );
                self.raw_documents = Some(raw_documents);
                self.source_urls = Some(source_urls);
            }
            StepOutput::Summary(summary) => {
                assert!(
                    self.research_summary.is_none(),
                    "research_summary written twice"
                );
                self.research_summary = Some(summary);
            }
            StepOutput::Evaluation(eval) => {
                assert!(
                    self.evaluation_result.is_none(),
                    "evaluation_result written twice"
                );
                self.evaluation_result = Some(eval);
            }
        }
    }
}
