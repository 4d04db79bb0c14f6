//! bidfit orchestration core
//!
//! A fixed four-step evaluation pipeline over a shared, write-once
//! context:
//! - Requirement extraction and company research run concurrently
//! - Summarization waits for both (one edge is a pure barrier)
//! - Scoring consumes the summary and produces the terminal result
//!
//! This crate owns only the orchestration: the dependency graph, the
//! context data contract, the step seam, and the wave executor. The
//! concrete steps and the external capabilities they delegate to live
//! in `bidfit-steps` and `bidfit-providers`.

pub mod context;
pub mod error;
pub mod executor;
pub mod graph;
pub mod step;
pub mod types;

pub use context::SharedContext;
pub use error::{GraphError, PipelineError};
pub use executor::PipelineExecutor;
pub use graph::{EdgeKind, StepGraph};
pub use step::Step;
pub use types::{
    CostDetails, EvaluationResult, KeySignals, RunId, ScaleAlignment, ScopeCategory, ScopeCoverage,
    ScoreBreakdown, StepId, StepOutput, StructuredRequirements, TimelineDetails, WeightedBreakdown,
};
