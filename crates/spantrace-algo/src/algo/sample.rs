// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Built-in demonstration graph: 10 vertices, 17 weighted edges.

use crate::algo::Graph;
use spantrace_common::Result;

/// Total MST weight of [`demo_graph`].
pub const DEMO_MST_COST: f64 = 29.0;

const DEMO_VERTICES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

const DEMO_EDGES: [(&str, &str, f64); 17] = [
    ("A", "B", 4.0),
    ("A", "D", 2.0),
    ("B", "C", 3.0),
    ("B", "E", 6.0),
    ("C", "F", 5.0),
    ("C", "J", 7.0),
    ("D", "E", 1.0),
    ("D", "G", 8.0),
    ("E", "F", 4.0),
    ("E", "G", 9.0),
    ("E", "H", 3.0),
    ("F", "H", 2.0),
    ("F", "I", 6.0),
    ("F", "J", 4.0),
    ("G", "H", 7.0),
    ("H", "I", 5.0),
    ("I", "J", 3.0),
];

pub fn demo_graph() -> Result<Graph> {
    Graph::build(DEMO_VERTICES, DEMO_EDGES)
}
