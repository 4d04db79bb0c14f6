//! Pipeline executor
//!
//! Executes a [`StepGraph`] in waves: every step whose declared
//! dependencies have completed runs in the current wave, the whole
//! wave runs concurrently, and each step's output is merged back into
//! the shared context before the next wave is computed. With the
//! standard topology the waves are {extract, research} then
//! {summarize} then {score}.
//!
//! # Critical invariant
//!
//! A field is never read before its sole writer has completed. The
//! executor enforces this purely through wave ordering: outputs are
//! merged only after the producing future resolved, so readers in
//! later waves always observe complete output. Correctness does not
//! depend on true parallelism: a wave joined on a single thread
//! observes the same partial order.

use crate::context::SharedContext;
use crate::error::{GraphError, PipelineError};
use crate::graph::StepGraph;
use crate::step::Step;
use crate::types::{EvaluationResult, StepId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

/// Executes steps in dependency order, merging outputs into the context
pub struct PipelineExecutor {
    graph: StepGraph,
    steps: HashMap<StepId, Arc<dyn Step>>,
}

impl PipelineExecutor {
    /// Create an executor over a dependency graph
    #[must_use]
    pub fn new(graph: StepGraph) -> Self {
        Self {
            graph,
            steps: HashMap::new(),
        }
    }

    /// Register a step implementation under its own id
    #[must_use]
    pub fn with_step(mut self, step: Arc<dyn Step>) -> Self {
        self.steps.insert(step.id(), step);
        self
    }

    /// The dependency graph this executor runs
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &StepGraph {
        &self.graph
    }

    /// Run the pipeline to completion
    ///
    /// The first step failure aborts the invocation; no partial result
    /// is returned. The returned context carries every populated field
    /// including the terminal evaluation.
    pub async fn run(&self, mut ctx: SharedContext) -> Result<SharedContext, PipelineError> {
        for id in self.graph.steps() {
            if !self.steps.contains_key(&id) {
                return Err(GraphError::MissingStep(id).into());
            }
        }

        let run_id = ctx.run_id();
        let mut completed: HashSet<StepId> = HashSet::new();
        while completed.len() < self.graph.step_count() {
            let wave = self.graph.ready_steps(&completed);
            assert!(
                !wave.is_empty(),
                "step graph stalled with {} of {} steps complete",
                completed.len(),
                self.graph.step_count()
            );
            tracing::debug!(run = %run_id, wave = ?wave, "dispatching wave");

            let ctx_ref = &ctx;
            let futures = wave.iter().map(|id| {
                let step = Arc::clone(&self.steps[id]);
                async move {
                    let started = Instant::now();
                    tracing::debug!(run = %run_id, step = %step.id(), "step started");
                    let output = step.run(ctx_ref).await.map_err(|e| {
                        tracing::error!(run = %run_id, step = %step.id(), error = %e, "step failed");
                        e
                    })?;
                    tracing::info!(
                        run = %run_id,
                        step = %step.id(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "step completed"
                    );
                    Ok::<_, PipelineError>(output)
                }
            });
            let outputs = futures::future::try_join_all(futures).await?;

            // Fields within a wave are disjoint, so merge order is
            // irrelevant.
            for output in outputs {
                debug_assert!(wave.contains(&output.producer()));
                ctx.merge(output);
            }
            completed.extend(wave);
        }

        Ok(ctx)
    }

    /// Convenience entry point: build the context, run, and return the
    /// terminal evaluation
    pub async fn evaluate(
        &self,
        requirements_text: &str,
        company_name: &str,
    ) -> Result<EvaluationResult, PipelineError> {
        let ctx = SharedContext::new(requirements_text, company_name)?;
        let ctx = self.run(ctx).await?;
        ctx.into_evaluation()
    }
}
