//! Summarization step
//!
//! Condenses the raw research documents into one narrative. The
//! instruction pins down what may never be omitted: prior-project
//! count and relevance, red flags, protocol alignment, reputational
//! signals, and anything else decision-relevant. With zero documents
//! the step answers with a fixed no-information summary and never
//! calls the model, since summarizing nothing invites fabrication.

use bidfit_core::{PipelineError, SharedContext, Step, StepId, StepOutput};
use bidfit_providers::ChatModel;
use std::sync::Arc;

/// Summary emitted when research found no documents
pub const NO_INFORMATION_SUMMARY: &str =
    "No public information about this company was found: the research \
     step returned zero documents. There is no evidence to summarize.";

const SUMMARIZE_INSTRUCTION: &str = "\
You are an expert construction project analyst.
You have collected multiple pieces of information about a company.
Your task: summarize all the content in detail, without skipping any
important information. Specifically, include:
1. How many projects the company has completed related to the current
   project, with details if available.
2. Any red flags in the company's history, performance, or timeline
   alignment.
3. Whether the company aligns with the protocols and requirements in
   the project details.
4. Any negative reports, bad news, or reputational concerns.
5. Any other observations that could impact the project decision.
Write a concise but complete plain-text summary combining all the
collected content. Be explicit and do not leave out anything important.
Do not add anything that is not supported by the content.
";

fn build_instruction(documents: &[String]) -> String {
    let mut instruction = String::from(SUMMARIZE_INSTRUCTION);
    instruction.push_str("\nCOLLECTED CONTENT:\n");
    for (i, doc) in documents.iter().enumerate() {
        instruction.push_str(&format!("--- Document {} ---\n{doc}\n", i + 1));
    }
    instruction
}

/// The summarization step
pub struct SummarizeStep {
    model: Arc<dyn ChatModel>,
}

impl SummarizeStep {
    #[must_use]
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait::async_trait]
impl Step for SummarizeStep {
    fn id(&self) -> StepId {
        StepId::Summarize
    }

    async fn run(&self, ctx: &SharedContext) -> Result<StepOutput, PipelineError> {
        let documents = ctx.raw_documents(StepId::Summarize)?;
        if documents.is_empty() {
            tracing::info!("no research documents; emitting no-information summary");
            return Ok(StepOutput::Summary(NO_INFORMATION_SUMMARY.to_string()));
        }

        let instruction = build_instruction(documents);
        let summary = self
            .model
            .generate(&instruction)
            .await
            .map_err(|e| PipelineError::SummarizationFailure(e.to_string()))?;
        Ok(StepOutput::Summary(summary))
    }
}
