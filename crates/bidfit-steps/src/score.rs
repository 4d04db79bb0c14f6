//! Scoring step
//!
//! Combines the original requirements text with the research summary
//! into a weighted, explained confidence score. The model is asked,
//! under schema constraint, for the four sub-scores, the key-signal
//! record, and the explanation. The weighted contributions and the
//! overall confidence are computed locally from the returned
//! sub-scores, so the arithmetic invariants (weights sum to 1, result
//! in [0, 1], monotone in every sub-score) hold by construction and a
//! caller can recompute the total from the exposed breakdown.

use bidfit_core::{
    EvaluationResult, KeySignals, PipelineError, ScoreBreakdown, SharedContext, Step, StepId,
    StepOutput, WeightedBreakdown,
};
use bidfit_providers::{structured, ChatModel};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// Weight of relevant prior project experience
pub const EXPERIENCE_WEIGHT: f64 = 0.40;
/// Weight of capability-versus-scale fit
pub const SCALE_FIT_WEIGHT: f64 = 0.25;
/// Weight of evidence quality
pub const EVIDENCE_QUALITY_WEIGHT: f64 = 0.20;
/// Weight of conditional reputation impact
pub const REPUTATION_IMPACT_WEIGHT: f64 = 0.15;

/// The four weights; must sum to exactly 1.0
pub const WEIGHTS: [f64; 4] = [
    EXPERIENCE_WEIGHT,
    SCALE_FIT_WEIGHT,
    EVIDENCE_QUALITY_WEIGHT,
    REPUTATION_IMPACT_WEIGHT,
];

const SCORE_INSTRUCTION: &str = "\
You are an expert construction project evaluator.
You must act as a STRICT, LOGICAL scoring engine, not a subjective
reviewer. You are given project requirements and externally gathered
information about a company, and you must score each component between
0 and 1 using the framework below.

MANDATORY SCORING FRAMEWORK

1. Relevant Project Experience (experience)
- Score on similarity of completed projects to the current scope.
- Larger or more complex prior projects COUNT POSITIVELY for smaller
  or mid-scale projects. NEVER penalize a company for having handled
  larger-scale work.

2. Capability vs Scale Fit (scale_fit)
- High if demonstrated capability meets or exceeds the required scale.
- Medium if capability is unclear but plausible.
- Low ONLY if the company has only handled significantly smaller work.

3. Evidence Quality (evidence_quality)
- High if the information is clear, consistent, and sourced.
- Medium if partial or indirect. Low if vague, promotional, or weak.

4. Reputation Impact (reputation_impact) - CONDITIONAL
- FIRST classify any negative news:
  a) operational / legal / strategic impact, and
  b) contextually relevant to this project or its geography.
- If the negative news is NOT both impactful and contextually
  relevant, the score is exactly 1.0 (no penalty).
- Only if it is both, apply a proportional reduction.

RULES:
- Do NOT invent information. If evidence is missing, state the
  uncertainty explicitly and reflect it in evidence_quality.
- Do NOT apply penalties without explaining why the factor is
  relevant.
- The explanation must cover the reasoning behind ALL FOUR component
  scores, not just the final impression.
";

fn build_instruction(requirements_text: &str, summary: &str, sources: &[String]) -> String {
    format!(
        "{SCORE_INSTRUCTION}\n## Project Requirements:\n{requirements_text}\n\n\
         ## External Company Information:\n{summary}\n\n## Sources:\n{}\n",
        sources.join("\n")
    )
}

/// Model-side response shape: sub-scores, signals, explanation.
/// Weighted contributions are deliberately absent: they are computed
/// locally, never trusted from the collaborator.
#[derive(Debug, Deserialize, JsonSchema)]
struct ScoreResponse {
    scores: ScoreBreakdown,
    signals: KeySignals,
    explanation: String,
}

/// Multiply each sub-score by its fixed weight
#[must_use]
pub fn weighted_contributions(scores: &ScoreBreakdown) -> WeightedBreakdown {
    WeightedBreakdown {
        experience: scores.experience * EXPERIENCE_WEIGHT,
        scale_fit: scores.scale_fit * SCALE_FIT_WEIGHT,
        evidence_quality: scores.evidence_quality * EVIDENCE_QUALITY_WEIGHT,
        reputation_impact: scores.reputation_impact * REPUTATION_IMPACT_WEIGHT,
    }
}

/// Weighted sum of the four components
#[must_use]
pub fn overall_confidence(scores: &ScoreBreakdown) -> f64 {
    weighted_contributions(scores).total()
}

/// Check every sub-score is a finite value in [0, 1]
pub fn validate_sub_scores(scores: &ScoreBreakdown) -> Result<(), PipelineError> {
    let components = [
        ("experience", scores.experience),
        ("scale_fit", scores.scale_fit),
        ("evidence_quality", scores.evidence_quality),
        ("reputation_impact", scores.reputation_impact),
    ];
    for (name, value) in components {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(PipelineError::ScoringFailure(format!(
                "sub-score {name} = {value} outside [0, 1]"
            )));
        }
    }
    Ok(())
}

/// The scoring step
pub struct ScoreStep {
    model: Arc<dyn ChatModel>,
}

impl ScoreStep {
    #[must_use]
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait::async_trait]
impl Step for ScoreStep {
    fn id(&self) -> StepId {
        StepId::Score
    }

    async fn run(&self, ctx: &SharedContext) -> Result<StepOutput, PipelineError> {
        let summary = ctx.research_summary(StepId::Score)?;
        let sources = ctx.source_urls(StepId::Score)?;
        let instruction = build_instruction(ctx.requirements_text(), summary, sources);

        let response: ScoreResponse = structured(self.model.as_ref(), &instruction)
            .await
            .map_err(|e| PipelineError::ScoringFailure(e.to_string()))?;

        validate_sub_scores(&response.scores)?;
        let weighted = weighted_contributions(&response.scores);
        let overall = weighted.total();
        // The sub-score domain already bounds the sum, but the bound is
        // a contract: fail rather than clamp if it is ever violated.
        if !(0.0..=1.0).contains(&overall) {
            return Err(PipelineError::ScoringFailure(format!(
                "overall confidence {overall} outside [0, 1]"
            )));
        }

        tracing::info!(overall_confidence = overall, "scoring complete");
        Ok(StepOutput::Evaluation(EvaluationResult {
            company_name: ctx.company_name().to_string(),
            sources: sources.to_vec(),
            signals: response.signals,
            scores: response.scores,
            weighted,
            overall_confidence: overall,
            explanation: response.explanation,
        }))
    }
}
