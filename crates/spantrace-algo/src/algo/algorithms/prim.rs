// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Prim's Minimum Spanning Tree Algorithm.
//!
//! Grows a single tree from the start vertex (first inserted vertex unless
//! configured). Each round scans the newest tree vertex's incident edges,
//! relaxes the [`Frontier`] for outside neighbors and accepts the cheapest
//! frontier entry.
//!
//! With [`TraceVerbosity::Full`] an edge seen during a scan whose far
//! endpoint is already in the tree is recorded as an `AlreadyInTree`
//! rejection. Every edge of a connected graph then shows up exactly once in
//! the trace, either accepted or rejected.

use crate::algo::Graph;
use crate::algo::algorithms::{AlgorithmKind, MstAlgorithm};
use crate::algo::frontier::{Frontier, Relax};
use crate::algo::trace::{MstResult, StepReason, TraceBuilder};
use serde::Serialize;
use spantrace_common::core::id::EdgeId;
use spantrace_common::{MstConfig, MstError, Result, TraceVerbosity};
use tracing::{debug, instrument, trace};

pub struct Prim;

/// Lifecycle of a Prim run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimState {
    NotStarted,
    Growing,
    Done,
    Failed,
}

/// Prim engine bound to one graph.
///
/// [`PrimEngine::run`] always starts from scratch; the engine never mutates
/// the graph and can be run any number of times.
pub struct PrimEngine<'g> {
    graph: &'g Graph,
    config: MstConfig,
    state: PrimState,
}

impl<'g> PrimEngine<'g> {
    pub fn new(graph: &'g Graph, config: MstConfig) -> Self {
        Self {
            graph,
            config,
            state: PrimState::NotStarted,
        }
    }

    pub fn state(&self) -> PrimState {
        self.state
    }

    fn transition(&mut self, next: PrimState) {
        debug!(from = ?self.state, to = ?next, "prim state");
        self.state = next;
    }

    pub fn run(&mut self) -> Result<MstResult> {
        self.state = PrimState::NotStarted;
        let graph = self.graph;
        let n = graph.vertex_count();

        let start = match graph.resolve_start(self.config.start.as_ref()) {
            Ok(Some(start)) => start,
            Ok(None) => {
                self.transition(PrimState::Done);
                return Ok(MstResult::empty(AlgorithmKind::Prim));
            }
            Err(e) => {
                self.transition(PrimState::Failed);
                return Err(e);
            }
        };

        let record_rejections = self.config.verbosity == TraceVerbosity::Full;
        let mut trace =
            TraceBuilder::new(AlgorithmKind::Prim, Some(graph.to_vertex(start).clone()));
        let mut in_tree = vec![false; n];
        let mut frontier = Frontier::new(n);
        let mut tree_size = 1;

        in_tree[start as usize] = true;
        frontier.close(start);
        self.transition(PrimState::Growing);
        scan(
            graph,
            start,
            None,
            &in_tree,
            &mut frontier,
            &mut trace,
            record_rejections,
        );

        while tree_size < n {
            let Some(entry) = frontier.extract_min() else {
                self.transition(PrimState::Failed);
                let unreachable: Vec<_> = (0..n as u32)
                    .filter(|&slot| !in_tree[slot as usize])
                    .map(|slot| graph.to_vertex(slot).clone())
                    .collect();
                debug!(
                    tree_size,
                    unreachable = unreachable.len(),
                    "prim frontier exhausted"
                );
                return Err(MstError::DisconnectedGraph {
                    algorithm: Prim::name(),
                    start: graph.to_vertex(start).clone(),
                    unreachable,
                });
            };

            let step = trace.accept(
                graph.edge_unchecked(entry.edge),
                StepReason::LightestFrontierEdge,
            );
            trace!(step = %step, "accepted");

            in_tree[entry.vertex as usize] = true;
            tree_size += 1;
            scan(
                graph,
                entry.vertex,
                Some(entry.edge),
                &in_tree,
                &mut frontier,
                &mut trace,
                record_rejections,
            );
        }

        self.transition(PrimState::Done);
        debug!(
            accepted = trace.accepted_count(),
            total_cost = trace.cost(),
            "prim finished"
        );
        Ok(trace.finish())
    }
}

/// Scan the incident edges of a vertex that just joined the tree.
fn scan(
    graph: &Graph,
    vertex: u32,
    via: Option<EdgeId>,
    in_tree: &[bool],
    frontier: &mut Frontier,
    trace: &mut TraceBuilder,
    record_rejections: bool,
) {
    for &(neighbor, eid) in graph.neighbor_slots(vertex) {
        if Some(eid) == via {
            continue;
        }
        let edge = graph.edge_unchecked(eid);
        if in_tree[neighbor as usize] {
            if record_rejections {
                let step = trace.reject(edge, StepReason::AlreadyInTree);
                trace!(step = %step, "rejected");
            }
            continue;
        }
        if frontier.relax(neighbor, eid, edge.weight) == Relax::Improved {
            trace!(edge = %edge, "frontier improved");
        }
    }
}

impl MstAlgorithm for Prim {
    type Config = MstConfig;

    fn name() -> &'static str {
        "prim"
    }

    #[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn run(graph: &Graph, config: Self::Config) -> Result<MstResult> {
        PrimEngine::new(graph, config).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::sample::demo_graph;
    use crate::algo::test_utils::{accepted_labels, build_test_graph, step_log};
    use spantrace_common::VertexId;

    #[test]
    fn test_prim_square_with_diagonal() {
        let graph = build_test_graph(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 2.0),
                ("C", "D", 3.0),
                ("A", "D", 10.0),
                ("A", "C", 4.0),
            ],
        );
        let result = Prim::run(&graph, MstConfig::default()).unwrap();

        assert_eq!(result.total_cost, 6.0);
        assert_eq!(accepted_labels(&result), vec!["A-B", "B-C", "C-D"]);
        assert_eq!(
            step_log(&result),
            vec![
                "Added edge A-B (weight: 1)",
                "Added edge B-C (weight: 2)",
                "Skipped A-C (already connected)",
                "Added edge C-D (weight: 3)",
                "Skipped A-D (already connected)",
            ]
        );
        let costs: Vec<f64> = result.steps.iter().map(|s| s.running_cost).collect();
        assert_eq!(costs, vec![1.0, 3.0, 3.0, 6.0, 6.0]);
        assert_eq!(result.preamble(), "Starting with vertex A");
    }

    #[test]
    fn test_prim_decisions_only() {
        let graph = build_test_graph(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)],
        );
        let config = MstConfig::default().with_verbosity(TraceVerbosity::Decisions);
        let result = Prim::run(&graph, config).unwrap();
        assert_eq!(result.steps.len(), 2);
        assert!(result.steps.iter().all(|s| s.accepted));
        assert_eq!(result.total_cost, 3.0);
    }

    #[test]
    fn test_prim_sample_graph() {
        let graph = demo_graph().unwrap();
        let result = Prim::run(&graph, MstConfig::default()).unwrap();

        assert_eq!(result.total_cost, 29.0);
        assert_eq!(
            accepted_labels(&result),
            vec!["A-D", "D-E", "E-H", "F-H", "A-B", "B-C", "F-J", "I-J", "G-H"]
        );
        // Full verbosity lists every edge once
        assert_eq!(result.steps.len(), graph.edge_count());
        assert_eq!(result.steps[4].description(), "Skipped E-F (already connected)");
    }

    #[test]
    fn test_prim_custom_start() {
        let graph = build_test_graph(&["A", "B", "C"], &[("A", "B", 1.0), ("B", "C", 2.0)]);
        let result = Prim::run(&graph, MstConfig::default().with_start("C")).unwrap();
        assert_eq!(result.start, Some(VertexId::from("C")));
        assert_eq!(accepted_labels(&result), vec!["B-C", "A-B"]);
    }

    #[test]
    fn test_prim_state_machine() {
        let graph = build_test_graph(&["A", "B"], &[("A", "B", 1.0)]);
        let mut engine = PrimEngine::new(&graph, MstConfig::default());
        assert_eq!(engine.state(), PrimState::NotStarted);
        engine.run().unwrap();
        assert_eq!(engine.state(), PrimState::Done);

        let split = build_test_graph(&["A", "B", "C"], &[("A", "B", 1.0)]);
        let mut engine = PrimEngine::new(&split, MstConfig::default());
        let err = engine.run().unwrap_err();
        assert_eq!(engine.state(), PrimState::Failed);
        assert_eq!(err.unreachable(), Some(&[VertexId::from("C")][..]));
    }

    #[test]
    fn test_prim_trivial_graphs() {
        let empty = build_test_graph(&[], &[]);
        let result = Prim::run(&empty, MstConfig::default()).unwrap();
        assert!(result.steps.is_empty());
        assert_eq!(result.total_cost, 0.0);

        let single = build_test_graph(&["A"], &[]);
        let result = Prim::run(&single, MstConfig::default()).unwrap();
        assert!(result.steps.is_empty());
        assert!(result.mst_edges.is_empty());
        assert_eq!(result.start, Some(VertexId::from("A")));
    }

    #[test]
    fn test_prim_unknown_start() {
        let graph = build_test_graph(&["A"], &[]);
        let err = Prim::run(&graph, MstConfig::default().with_start("Z")).unwrap_err();
        assert!(matches!(err, MstError::UnknownStartVertex { .. }));
    }
}
