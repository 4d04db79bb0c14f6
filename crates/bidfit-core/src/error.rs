//! Error types for the evaluation pipeline
//!
//! One variant per step failure kind, plus graph construction errors.
//! Any step failure aborts the invocation: the executor returns the
//! first error it observes and no partial result is ever surfaced.

use crate::types::StepId;

/// Pipeline-level error
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Invocation input rejected before any step ran
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Extraction step could not produce a schema-conforming record
    #[error("extraction failed: {0}")]
    ExtractionFailure(String),

    /// Search provider could not be reached
    #[error("search provider unavailable: {0}")]
    SearchUnavailable(String),

    /// Search provider returned an item missing a body or URL
    #[error("malformed search result at rank {rank}: missing {missing}")]
    MalformedResult { rank: usize, missing: &'static str },

    /// Summarization step failed
    #[error("summarization failed: {0}")]
    SummarizationFailure(String),

    /// Scoring step failed (collaborator error, missing sub-score, or
    /// out-of-range confidence)
    #[error("scoring failed: {0}")]
    ScoringFailure(String),

    /// A step was asked to read a field its dependencies have not
    /// populated. Unreachable given a correctly constructed topology.
    #[error("dependency not ready: step {step} read unpopulated field `{field}`")]
    DependencyNotReady { step: StepId, field: &'static str },

    /// Graph construction failed
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

impl PipelineError {
    /// The step this failure originated from, if any
    #[must_use]
    pub fn step(&self) -> Option<StepId> {
        match self {
            Self::ExtractionFailure(_) => Some(StepId::Extract),
            Self::SearchUnavailable(_) | Self::MalformedResult { .. } => Some(StepId::Research),
            Self::SummarizationFailure(_) => Some(StepId::Summarize),
            Self::ScoringFailure(_) => Some(StepId::Score),
            Self::DependencyNotReady { step, .. } => Some(*step),
            Self::InvalidInput(_) | Self::Graph(_) => None,
        }
    }
}

/// Step graph construction errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// Edges from a step to itself are rejected
    #[error("self loop on {0}")]
    SelfLoop(StepId),

    /// Adding the edge would create a cycle
    #[error("edge {from} -> {to} would create a cycle")]
    CycleDetected { from: StepId, to: StepId },

    /// A graph node has no registered step implementation
    #[error("no step registered for {0}")]
    MissingStep(StepId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_step_context() {
        let err = PipelineError::MalformedResult {
            rank: 2,
            missing: "url",
        };
        assert_eq!(err.step(), Some(StepId::Research));
        assert!(err.to_string().contains("rank 2"));

        let err = PipelineError::DependencyNotReady {
            step: StepId::Score,
            field: "research_summary",
        };
        assert!(err.to_string().contains("score-fit"));
        assert!(err.to_string().contains("research_summary"));
    }

    #[test]
    fn graph_error_display() {
        let err = GraphError::CycleDetected {
            from: StepId::Score,
            to: StepId::Extract,
        };
        assert!(err.to_string().contains("cycle"));
    }
}
