//! Step trait: the contract every pipeline step implements
//!
//! A step is one data-transforming unit: it reads fields its declared
//! dependencies populated, performs at most one external-capability
//! delegation, and returns the output the executor merges back. Steps
//! never mutate the context themselves.

use crate::context::SharedContext;
use crate::error::PipelineError;
use crate::types::{StepId, StepOutput};

/// A single pipeline step
#[async_trait::async_trait]
pub trait Step: Send + Sync {
    /// This step's identity in the dependency graph
    fn id(&self) -> StepId;

    /// Execute the step against the shared context
    ///
    /// The executor guarantees every declared dependency has completed
    /// before this is called; reading an unpopulated field therefore
    /// means the topology is wrong and surfaces as
    /// [`PipelineError::DependencyNotReady`].
    async fn run(&self, ctx: &SharedContext) -> Result<StepOutput, PipelineError>;
}
