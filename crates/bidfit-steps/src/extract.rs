//! Extraction step
//!
//! Turns free-text project requirements into a
//! [`StructuredRequirements`] record via one schema-constrained model
//! call. The instruction forbids invented values: anything missing or
//! ambiguous in the text must come back null or empty.

use bidfit_core::{PipelineError, SharedContext, Step, StepId, StepOutput, StructuredRequirements};
use bidfit_providers::{structured, ChatModel};
use std::sync::Arc;

const EXTRACT_INSTRUCTION: &str = "\
You are an expert construction project manager and requirements analyst.
Your task is to EXTRACT structured data from the input.

STRICT RULES (MANDATORY):
- Every field must match the required type exactly.
- If information is missing or unclear, return null or an empty list.
- Do NOT invent values. Null is always preferable to a guess.

DATA RULES:
- Convert budget figures into plain USD numbers
  (e.g. '$1.2M target, $1.35M hard stop' becomes
  target_budget_usd 1200000 and hard_stop_usd 1350000).
- Convert timeline information into months and weeks.
- scope_coverage categories are restricted to exactly
  HVC, Electrical, or Interior; summarize each scope item as one of
  those and drop anything that fits none.

Your responsibilities:
1. Extract structured requirements.
2. Identify constraints and priorities.
3. Convert budget and timeline information into the numeric fields.
4. Capture legal and compliance obligations as free text.
";

fn build_instruction(requirements_text: &str) -> String {
    format!("{EXTRACT_INSTRUCTION}\nINPUT:\n{requirements_text}\n")
}

/// The extraction step
pub struct ExtractStep {
    model: Arc<dyn ChatModel>,
}

impl ExtractStep {
    #[must_use]
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait::async_trait]
impl Step for ExtractStep {
    fn id(&self) -> StepId {
        StepId::Extract
    }

    async fn run(&self, ctx: &SharedContext) -> Result<StepOutput, PipelineError> {
        let instruction = build_instruction(ctx.requirements_text());
        let requirements: StructuredRequirements =
            structured(self.model.as_ref(), &instruction)
                .await
                .map_err(|e| PipelineError::ExtractionFailure(e.to_string()))?;
        tracing::debug!(
            included = requirements.scope_coverage.included.len(),
            "extracted structured requirements"
        );
        Ok(StepOutput::Requirements(requirements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidfit_core::ScopeCategory;
    use bidfit_test_utils::ScriptedModel;
    use serde_json::json;

    #[tokio::test]
    async fn extracts_structured_requirements() {
        let model = Arc::new(ScriptedModel::new().with_structured(json!({
            "company_name": null,
            "cost": {
                "target_budget_usd": 1_200_000.0,
                "overrun_percentage": null,
                "hard_stop_usd": 1_350_000.0
            },
            "timeline": {
                "target_completion_months": 6,
                "acceptable_extension_weeks": null,
                "delay_penalties": null
            },
            "prior_similar_projects_count": null,
            "scope_coverage": {
                "included": ["HVC", "Electrical"],
                "excluded": [],
                "sub_contracted": []
            },
            "legal_and_compliance": null
        })));
        let step = ExtractStep::new(Arc::clone(&model) as Arc<dyn ChatModel>);
        let ctx = SharedContext::new(
            "$1.2M target, $1.35M hard stop, 6 months, HVAC and electrical only",
            "Acme Builders",
        )
        .unwrap();

        let output = step.run(&ctx).await.unwrap();
        let StepOutput::Requirements(req) = output else {
            panic!("wrong output variant");
        };
        assert_eq!(req.cost.target_budget_usd, Some(1_200_000.0));
        assert_eq!(req.cost.hard_stop_usd, Some(1_350_000.0));
        assert_eq!(
            req.scope_coverage.included,
            vec![ScopeCategory::Hvc, ScopeCategory::Electrical]
        );

        // The free text must reach the model verbatim.
        let instructions = model.instructions();
        assert!(instructions[0].contains("$1.2M target"));
    }

    #[tokio::test]
    async fn collaborator_failure_maps_to_extraction_failure() {
        let model = Arc::new(ScriptedModel::new().with_structured_failure("backend down"));
        let step = ExtractStep::new(model as Arc<dyn ChatModel>);
        let ctx = SharedContext::new("some requirements", "Acme").unwrap();

        let err = step.run(&ctx).await.unwrap_err();
        assert!(matches!(err, PipelineError::ExtractionFailure(_)));
    }

    #[tokio::test]
    async fn schema_violating_response_maps_to_extraction_failure() {
        let model =
            Arc::new(ScriptedModel::new().with_structured(json!({ "cost": "a string" })));
        let step = ExtractStep::new(model as Arc<dyn ChatModel>);
        let ctx = SharedContext::new("some requirements", "Acme").unwrap();

        let err = step.run(&ctx).await.unwrap_err();
        assert!(matches!(err, PipelineError::ExtractionFailure(_)));
    }
}
