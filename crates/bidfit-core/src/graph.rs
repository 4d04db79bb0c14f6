//! Step dependency graph
//!
//! A fixed, small partial order over [`StepId`]s. Edges come in two
//! kinds: `Data` edges mean the successor consumes the predecessor's
//! output; `Barrier` edges carry no payload and only order completion
//! (the summarization step waits for extraction without reading it).
//! The executor treats both identically for readiness; the
//! distinction documents which fields a step may legally read.

use crate::error::GraphError;
use crate::types::StepId;
use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::HashSet;

/// Kind of a dependency edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// The successor consumes the predecessor's output field(s)
    Data,
    /// Pure ordering: the successor waits for completion but reads
    /// nothing the predecessor wrote
    Barrier,
}

/// The step dependency graph
#[derive(Debug, Clone, Default)]
pub struct StepGraph {
    inner: DiGraphMap<StepId, EdgeKind>,
}

impl StepGraph {
    /// Create an empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard four-step topology:
    ///
    /// ```text
    /// extract ----barrier----.
    ///                         v
    /// research ---data---> summarize ---data---> score
    /// ```
    ///
    /// Extract and research share no dependency and are eligible to
    /// run concurrently.
    #[must_use]
    pub fn standard() -> Self {
        let mut graph = Self::new();
        for id in StepId::ALL {
            graph.add_step(id);
        }
        // Fixed topology on a fresh graph; edge insertion cannot fail.
        let edges = [
            (StepId::Extract, StepId::Summarize, EdgeKind::Barrier),
            (StepId::Research, StepId::Summarize, EdgeKind::Data),
            (StepId::Summarize, StepId::Score, EdgeKind::Data),
        ];
        for (from, to, kind) in edges {
            graph
                .add_edge(from, to, kind)
                .unwrap_or_else(|e| unreachable!("standard topology is acyclic: {e}"));
        }
        graph
    }

    /// Add a step node (idempotent)
    pub fn add_step(&mut self, id: StepId) {
        self.inner.add_node(id);
    }

    /// Add a dependency edge `from -> to`
    ///
    /// Rejects self-loops and any edge that would create a cycle; on
    /// rejection the graph is left unchanged.
    pub fn add_edge(&mut self, from: StepId, to: StepId, kind: EdgeKind) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        self.inner.add_edge(from, to, kind);
        if is_cyclic_directed(&self.inner) {
            self.inner.remove_edge(from, to);
            return Err(GraphError::CycleDetected { from, to });
        }
        Ok(())
    }

    /// Number of steps in the graph
    #[inline]
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.inner.node_count()
    }

    /// All steps in the graph, in stable order
    pub fn steps(&self) -> impl Iterator<Item = StepId> + '_ {
        let mut nodes: Vec<StepId> = self.inner.nodes().collect();
        nodes.sort();
        nodes.into_iter()
    }

    /// Declared dependencies of a step (both edge kinds)
    #[must_use]
    pub fn dependencies(&self, id: StepId) -> Vec<StepId> {
        let mut deps: Vec<StepId> = self
            .inner
            .neighbors_directed(id, Direction::Incoming)
            .collect();
        deps.sort();
        deps
    }

    /// Steps with no dependencies (the initial wave)
    #[must_use]
    pub fn entry_steps(&self) -> Vec<StepId> {
        let mut entries: Vec<StepId> = self
            .inner
            .nodes()
            .filter(|n| {
                self.inner
                    .neighbors_directed(*n, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect();
        entries.sort();
        entries
    }

    /// Steps whose declared dependencies are all in `completed` and
    /// which are not themselves completed yet
    ///
    /// Barrier edges count toward readiness exactly like data edges:
    /// a step never starts before every declared dependency reports
    /// completion.
    #[must_use]
    pub fn ready_steps(&self, completed: &HashSet<StepId>) -> Vec<StepId> {
        let mut ready: Vec<StepId> = self
            .inner
            .nodes()
            .filter(|n| !completed.contains(n))
            .filter(|n| {
                self.inner
                    .neighbors_directed(*n, Direction::Incoming)
                    .all(|dep| completed.contains(&dep))
            })
            .collect();
        ready.sort();
        ready
    }

    /// Topological order of all steps
    ///
    /// Only fails on a cyclic graph, which [`Self::add_edge`] already
    /// prevents.
    pub fn topological_sort(&self) -> Result<Vec<StepId>, GraphError> {
        toposort(&self.inner, None).map_err(|cycle| GraphError::CycleDetected {
            from: cycle.node_id(),
            to: cycle.node_id(),
        })
    }
}
