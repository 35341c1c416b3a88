// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Kruskal's Minimum Spanning Tree Algorithm.
//!
//! Sorts all edges by weight, ties broken by edge insertion order, then scans
//! every edge once. A [`DisjointSet`] decides whether an edge joins two
//! components (accepted) or would close a cycle (rejected).

use crate::algo::Graph;
use crate::algo::algorithms::{AlgorithmKind, MstAlgorithm};
use crate::algo::disjoint_set::DisjointSet;
use crate::algo::trace::{MstResult, StepReason, TraceBuilder};
use serde::Serialize;
use spantrace_common::{MstConfig, MstError, Result};
use tracing::{debug, instrument, trace};

pub struct Kruskal;

/// Lifecycle of a Kruskal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KruskalState {
    NotStarted,
    Sorting,
    Scanning,
    Done,
    Failed,
}

/// Kruskal engine bound to one graph.
pub struct KruskalEngine<'g> {
    graph: &'g Graph,
    config: MstConfig,
    state: KruskalState,
}

impl<'g> KruskalEngine<'g> {
    pub fn new(graph: &'g Graph, config: MstConfig) -> Self {
        Self {
            graph,
            config,
            state: KruskalState::NotStarted,
        }
    }

    pub fn state(&self) -> KruskalState {
        self.state
    }

    fn transition(&mut self, next: KruskalState) {
        debug!(from = ?self.state, to = ?next, "kruskal state");
        self.state = next;
    }

    pub fn run(&mut self) -> Result<MstResult> {
        self.state = KruskalState::NotStarted;
        let graph = self.graph;
        let n = graph.vertex_count();

        let reference = match graph.resolve_start(self.config.start.as_ref()) {
            Ok(Some(reference)) => reference,
            Ok(None) => {
                self.transition(KruskalState::Done);
                return Ok(MstResult::empty(AlgorithmKind::Kruskal));
            }
            Err(e) => {
                self.transition(KruskalState::Failed);
                return Err(e);
            }
        };

        self.transition(KruskalState::Sorting);
        let edges = graph.all_edges();
        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_unstable_by(|&a, &b| {
            edges[a]
                .weight
                .total_cmp(&edges[b].weight)
                .then(a.cmp(&b))
        });

        self.transition(KruskalState::Scanning);
        let mut components = DisjointSet::new(n);
        let mut trace = TraceBuilder::new(
            AlgorithmKind::Kruskal,
            Some(graph.to_vertex(reference).clone()),
        );

        for idx in order {
            let edge = &edges[idx];
            let (u, v) = graph.endpoints(edge.id);
            if components.union(u, v) {
                let step = trace.accept(edge, StepReason::JoinsComponents);
                trace!(step = %step, "accepted");
            } else {
                let step = trace.reject(edge, StepReason::WouldCreateCycle);
                trace!(step = %step, "rejected");
            }
        }

        if trace.accepted_count() + 1 < n {
            self.transition(KruskalState::Failed);
            let root = components.find(reference);
            let unreachable: Vec<_> = (0..n as u32)
                .filter(|&slot| components.find(slot) != root)
                .map(|slot| graph.to_vertex(slot).clone())
                .collect();
            debug!(
                components = components.component_count(),
                unreachable = unreachable.len(),
                "kruskal left a forest"
            );
            return Err(MstError::DisconnectedGraph {
                algorithm: Kruskal::name(),
                start: graph.to_vertex(reference).clone(),
                unreachable,
            });
        }

        self.transition(KruskalState::Done);
        debug!(
            accepted = trace.accepted_count(),
            total_cost = trace.cost(),
            "kruskal finished"
        );
        Ok(trace.finish())
    }
}

impl MstAlgorithm for Kruskal {
    type Config = MstConfig;

    fn name() -> &'static str {
        "kruskal"
    }

    #[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    fn run(graph: &Graph, config: Self::Config) -> Result<MstResult> {
        KruskalEngine::new(graph, config).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::sample::demo_graph;
    use crate::algo::test_utils::{accepted_labels, build_test_graph, step_log};
    use spantrace_common::VertexId;

    #[test]
    fn test_kruskal_square_with_diagonal() {
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
        let result = Kruskal::run(&graph, MstConfig::default()).unwrap();

        assert_eq!(result.total_cost, 6.0);
        assert_eq!(accepted_labels(&result), vec!["A-B", "B-C", "C-D"]);
        assert_eq!(
            step_log(&result),
            vec![
                "Added edge A-B (weight: 1)",
                "Added edge B-C (weight: 2)",
                "Added edge C-D (weight: 3)",
                "Skipped A-C (creates cycle)",
                "Skipped A-D (creates cycle)",
            ]
        );
    }

    #[test]
    fn test_kruskal_sample_graph() {
        let graph = demo_graph().unwrap();
        let result = Kruskal::run(&graph, MstConfig::default()).unwrap();

        assert_eq!(result.total_cost, 29.0);
        assert_eq!(
            accepted_labels(&result),
            vec!["D-E", "A-D", "F-H", "B-C", "E-H", "I-J", "A-B", "F-J", "G-H"]
        );
        assert_eq!(result.steps.len(), graph.edge_count());
        assert_eq!(result.steps[7].description(), "Skipped E-F (creates cycle)");
    }

    #[test]
    fn test_kruskal_equal_weights_follow_insertion_order() {
        let graph = build_test_graph(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("C", "D", 1.0),
                ("B", "C", 1.0),
                ("A", "D", 1.0),
            ],
        );
        let result = Kruskal::run(&graph, MstConfig::default()).unwrap();
        assert_eq!(accepted_labels(&result), vec!["A-B", "C-D", "B-C"]);
        assert_eq!(step_log(&result)[3], "Skipped A-D (creates cycle)");
    }

    #[test]
    fn test_kruskal_disconnected() {
        let graph = build_test_graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("C", "D", 1.0)],
        );
        let mut engine = KruskalEngine::new(&graph, MstConfig::default());
        let err = engine.run().unwrap_err();
        assert_eq!(engine.state(), KruskalState::Failed);
        assert_eq!(
            err.unreachable(),
            Some(&[VertexId::from("C"), VertexId::from("D")][..])
        );
    }

    #[test]
    fn test_kruskal_trivial_graphs() {
        let empty = build_test_graph(&[], &[]);
        let mut engine = KruskalEngine::new(&empty, MstConfig::default());
        let result = engine.run().unwrap();
        assert_eq!(engine.state(), KruskalState::Done);
        assert!(result.steps.is_empty());

        let single = build_test_graph(&["A"], &[]);
        let result = Kruskal::run(&single, MstConfig::default()).unwrap();
        assert!(result.steps.is_empty());
        assert_eq!(result.total_cost, 0.0);
    }
}
