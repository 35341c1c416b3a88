// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Trace/Result model shared by both engines.

use crate::algo::Edge;
use crate::algo::algorithms::AlgorithmKind;
use crate::algo::cursor::TraceCursor;
use serde::{Deserialize, Serialize};
use spantrace_common::core::id::VertexId;
use std::collections::BTreeSet;
use std::fmt;

/// Relative tolerance used when comparing total costs.
const COST_EPSILON: f64 = 1e-9;

/// Why an edge was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepReason {
    /// Prim: cheapest edge from the tree to an outside vertex.
    LightestFrontierEdge,
    /// Kruskal: edge joins two different components.
    JoinsComponents,
    /// Prim: both endpoints are already in the tree.
    AlreadyInTree,
    /// Kruskal: both endpoints are already in the same component.
    WouldCreateCycle,
}

impl StepReason {
    pub fn is_acceptance(&self) -> bool {
        matches!(
            self,
            StepReason::LightestFrontierEdge | StepReason::JoinsComponents
        )
    }

    /// Short decision note, e.g. `creates cycle`.
    pub fn note(&self) -> &'static str {
        match self {
            StepReason::AlreadyInTree => "already connected",
            StepReason::WouldCreateCycle => "creates cycle",
            StepReason::LightestFrontierEdge | StepReason::JoinsComponents => "accepted",
        }
    }
}

/// One accept/reject decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Position in the trace, starting at 0
    pub index: usize,
    pub edge: Edge,
    pub accepted: bool,
    pub reason: StepReason,
    /// Total weight of accepted edges after this step
    pub running_cost: f64,
}

impl Step {
    /// Log line, e.g. `Added edge A-D (weight: 2)` or
    /// `Skipped E-F (creates cycle)`.
    pub fn description(&self) -> String {
        if self.accepted {
            format!(
                "Added edge {} (weight: {})",
                self.edge.label(),
                self.edge.weight
            )
        } else {
            format!(
                "Skipped {} ({})",
                self.edge.label(),
                self.reason.note()
            )
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Outcome of one engine run. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    pub algorithm: AlgorithmKind,
    /// Start vertex (Prim) or reference vertex (Kruskal); `None` for an
    /// empty graph
    pub start: Option<VertexId>,
    /// Accepted edges in acceptance order
    pub mst_edges: Vec<Edge>,
    pub total_cost: f64,
    pub steps: Vec<Step>,
}

impl MstResult {
    /// Result for a graph with no vertices.
    pub fn empty(algorithm: AlgorithmKind) -> Self {
        Self {
            algorithm,
            start: None,
            mst_edges: Vec::new(),
            total_cost: 0.0,
            steps: Vec::new(),
        }
    }

    /// Opening log line of the run.
    pub fn preamble(&self) -> String {
        match (self.algorithm, &self.start) {
            (AlgorithmKind::Kruskal, _) => "Sorting edges by weight".to_string(),
            (AlgorithmKind::Prim, Some(start)) => format!("Starting with vertex {}", start),
            (AlgorithmKind::Prim, None) => "Empty graph, nothing to grow".to_string(),
        }
    }

    pub fn accepted_count(&self) -> usize {
        self.mst_edges.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.steps.len() - self.mst_edges.len()
    }

    /// Accepted edges as an unordered set of endpoint pairs.
    pub fn edge_set(&self) -> BTreeSet<(VertexId, VertexId)> {
        self.mst_edges
            .iter()
            .map(|edge| {
                let (a, b) = edge.key();
                (a.clone(), b.clone())
            })
            .collect()
    }

    /// Whether both results chose the same edges, ignoring order.
    ///
    /// Under weight ties two correct engines may pick different trees; use
    /// [`MstResult::same_cost`] for the property that always holds.
    pub fn same_tree(&self, other: &MstResult) -> bool {
        self.edge_set() == other.edge_set()
    }

    /// Whether both totals agree within a relative tolerance.
    pub fn same_cost(&self, other: &MstResult) -> bool {
        let scale = self.total_cost.abs().max(other.total_cost.abs()).max(1.0);
        (self.total_cost - other.total_cost).abs() <= COST_EPSILON * scale
    }

    /// Pull-based replay over the steps.
    pub fn cursor(&self) -> TraceCursor<'_> {
        TraceCursor::new(self)
    }
}

/// Accumulates steps while an engine runs.
#[derive(Debug)]
pub(crate) struct TraceBuilder {
    algorithm: AlgorithmKind,
    start: Option<VertexId>,
    steps: Vec<Step>,
    mst_edges: Vec<Edge>,
    cost: f64,
}

impl TraceBuilder {
    pub(crate) fn new(algorithm: AlgorithmKind, start: Option<VertexId>) -> Self {
        Self {
            algorithm,
            start,
            steps: Vec::new(),
            mst_edges: Vec::new(),
            cost: 0.0,
        }
    }

    pub(crate) fn accept(&mut self, edge: &Edge, reason: StepReason) -> &Step {
        debug_assert!(reason.is_acceptance());
        self.cost += edge.weight;
        self.mst_edges.push(edge.clone());
        self.push(edge, true, reason)
    }

    pub(crate) fn reject(&mut self, edge: &Edge, reason: StepReason) -> &Step {
        debug_assert!(!reason.is_acceptance());
        self.push(edge, false, reason)
    }

    fn push(&mut self, edge: &Edge, accepted: bool, reason: StepReason) -> &Step {
        let index = self.steps.len();
        self.steps.push(Step {
            index,
            edge: edge.clone(),
            accepted,
            reason,
            running_cost: self.cost,
        });
        &self.steps[index]
    }

    pub(crate) fn accepted_count(&self) -> usize {
        self.mst_edges.len()
    }

    pub(crate) fn cost(&self) -> f64 {
        self.cost
    }

    pub(crate) fn finish(self) -> MstResult {
        MstResult {
            algorithm: self.algorithm,
            start: self.start,
            mst_edges: self.mst_edges,
            total_cost: self.cost,
            steps: self.steps,
        }
    }
}
