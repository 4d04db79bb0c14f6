//! Core types for the evaluation pipeline
//!
//! Defines the fundamental types shared across the workspace:
//! - Step identifiers
//! - Step outputs (the write-once payloads merged into the context)
//! - The structured requirements record produced by extraction
//! - The terminal evaluation record produced by scoring

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one pipeline invocation
///
/// Minted when the shared context is created and carried through the
/// executor's log events so concurrent invocations can be told apart
/// in the trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a pipeline step
///
/// The topology is fixed: four steps, two of them independent. Using a
/// closed enum (rather than an opaque id) lets the graph and the
/// executor stay `Copy`-cheap and exhaustively matchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StepId {
    /// Structured extraction of project requirements from free text
    Extract,
    /// External search for company information
    Research,
    /// Condensing raw research documents into one narrative
    Summarize,
    /// Weighted confidence scoring of company-project fit
    Score,
}

impl StepId {
    /// All steps, in a stable order (not an execution order).
    pub const ALL: [StepId; 4] = [
        StepId::Extract,
        StepId::Research,
        StepId::Summarize,
        StepId::Score,
    ];

    /// Stable machine-readable name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extract => "extract-requirements",
            Self::Research => "research-company",
            Self::Summarize => "summarize-research",
            Self::Score => "score-fit",
        }
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a completed step
///
/// Each variant corresponds to the context field(s) the step is the
/// sole writer of. The executor merges these back into the
/// [`SharedContext`](crate::context::SharedContext); steps never write
/// the context directly.
#[derive(Debug, Clone)]
pub enum StepOutput {
    /// Written by [`StepId::Extract`]
    Requirements(StructuredRequirements),
    /// Written by [`StepId::Research`]; the two sequences are
    /// positionally correlated (same index = same result)
    Research {
        raw_documents: Vec<String>,
        source_urls: Vec<String>,
    },
    /// Written by [`StepId::Summarize`]
    Summary(String),
    /// Written by [`StepId::Score`], terminal
    Evaluation(EvaluationResult),
}

impl StepOutput {
    /// The step this output belongs to
    #[inline]
    #[must_use]
    pub fn producer(&self) -> StepId {
        match self {
            Self::Requirements(_) => StepId::Extract,
            Self::Research { .. } => StepId::Research,
            Self::Summary(_) => StepId::Summarize,
            Self::Evaluation(_) => StepId::Score,
        }
    }
}

/// Closed scope vocabulary for extracted coverage categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ScopeCategory {
    #[serde(rename = "HVC")]
    Hvc,
    Electrical,
    Interior,
}

/// Cost details extracted from the requirements text
///
/// All fields optional: the extractor is instructed to prefer nulls
/// over invented values when the text is ambiguous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CostDetails {
    /// Target budget in USD
    pub target_budget_usd: Option<f64>,
    /// Acceptable overrun as a percentage of the target budget
    pub overrun_percentage: Option<u32>,
    /// Hard budget ceiling in USD
    pub hard_stop_usd: Option<f64>,
}

/// Timeline details extracted from the requirements text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimelineDetails {
    /// Target completion in months
    pub target_completion_months: Option<u32>,
    /// Acceptable schedule extension in weeks
    pub acceptable_extension_weeks: Option<u32>,
    /// Free-text description of delay penalties, if any
    pub delay_penalties: Option<String>,
}

/// Scope coverage, restricted to [`ScopeCategory`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScopeCoverage {
    /// Categories the project includes
    pub included: Vec<ScopeCategory>,
    /// Categories explicitly excluded
    pub excluded: Vec<ScopeCategory>,
    /// Categories handled by subcontractors
    pub sub_contracted: Vec<ScopeCategory>,
}

/// Structured project requirements, produced once by the extraction step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructuredRequirements {
    /// Company name mentioned in the requirements, if any
    pub company_name: Option<String>,
    /// Cost details
    pub cost: CostDetails,
    /// Project timeline
    pub timeline: TimelineDetails,
    /// Number of prior similar projects required
    pub prior_similar_projects_count: Option<u32>,
    /// Scope coverage categories
    pub scope_coverage: ScopeCoverage,
    /// Legal and compliance notes, free text
    pub legal_and_compliance: Option<String>,
}

/// Categorical scale alignment signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ScaleAlignment {
    Low,
    Medium,
    High,
}

/// Structured insight signals about the researched company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeySignals {
    /// Evidence of comparable experience in the target market
    pub has_comparable_experience: bool,
    /// Alignment of demonstrated project scale with the requirements
    pub scale_alignment: ScaleAlignment,
    /// Recent negative news or reputational concerns present
    pub recent_negative_news: bool,
}

/// The four raw sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Relevance of prior project experience
    pub experience: f64,
    /// Capability versus required scale
    pub scale_fit: f64,
    /// Clarity, consistency and credibility of the evidence
    pub evidence_quality: f64,
    /// Conditional reputation impact (1.0 = no penalty)
    pub reputation_impact: f64,
}

/// The weighted contribution of each sub-score
///
/// Kept alongside the raw sub-scores so a caller can recompute the
/// weighted sum and verify the weights without re-running the step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeightedBreakdown {
    pub experience: f64,
    pub scale_fit: f64,
    pub evidence_quality: f64,
    pub reputation_impact: f64,
}

impl WeightedBreakdown {
    /// Sum of the four contributions
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.experience + self.scale_fit + self.evidence_quality + self.reputation_impact
    }
}

/// Terminal evaluation record, produced once by the scoring step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationResult {
    /// Evaluated company name
    pub company_name: String,
    /// Source URLs the research step collected, in provider rank order
    pub sources: Vec<String>,
    /// Structured insight signals
    pub signals: KeySignals,
    /// Raw sub-scores
    pub scores: ScoreBreakdown,
    /// Weighted contributions (sub-score x weight)
    pub weighted: WeightedBreakdown,
    /// Weighted sum of the four components, in [0, 1]
    pub overall_confidence: f64,
    /// Reasoning referencing all four components
    pub explanation: String,
}
