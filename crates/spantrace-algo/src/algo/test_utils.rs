// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::{Edge, Graph, MstResult};

pub fn build_test_graph(vertices: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    Graph::build(vertices.iter().copied(), edges.iter().copied())
        .expect("test graph should be valid")
}

pub fn accepted_labels(result: &MstResult) -> Vec<String> {
    result.mst_edges.iter().map(Edge::label).collect()
}

pub fn step_log(result: &MstResult) -> Vec<String> {
    result.steps.iter().map(|s| s.description()).collect()
}
