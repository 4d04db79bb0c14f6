//! bidfit concrete pipeline steps
//!
//! One module per step (extraction, research, summarization, scoring),
//! each implementing the `Step` seam from `bidfit-core` and
//! delegating its external call through the `bidfit-providers` traits.
//! `pipeline` wires them over the standard topology.

pub mod extract;
pub mod pipeline;
pub mod research;
pub mod score;
pub mod summarize;

pub use extract::ExtractStep;
pub use pipeline::standard_pipeline;
pub use research::{ResearchStep, DEFAULT_MAX_RESULTS};
pub use score::{
    overall_confidence, validate_sub_scores, weighted_contributions, ScoreStep,
    EVIDENCE_QUALITY_WEIGHT, EXPERIENCE_WEIGHT, REPUTATION_IMPACT_WEIGHT, SCALE_FIT_WEIGHT,
    WEIGHTS,
};
pub use summarize::{SummarizeStep, NO_INFORMATION_SUMMARY};
