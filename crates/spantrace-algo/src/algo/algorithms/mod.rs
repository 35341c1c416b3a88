// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and algorithm selection.

use crate::algo::{Graph, MstResult};
use serde::{Deserialize, Serialize};
use spantrace_common::{MstConfig, Result};
use std::fmt;
use std::str::FromStr;

/// Core trait for the MST engines.
pub trait MstAlgorithm: Send + Sync {
    /// Algorithm parameters.
    type Config: Default + Clone + Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute the algorithm on a graph.
    fn run(graph: &Graph, config: Self::Config) -> Result<MstResult>;
}

/// The two supported MST algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Prim,
    Kruskal,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 2] = [AlgorithmKind::Prim, AlgorithmKind::Kruskal];

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Prim => Prim::name(),
            AlgorithmKind::Kruskal => Kruskal::name(),
        }
    }

    /// Human-facing name, e.g. `Prim's Algorithm`.
    pub fn title(&self) -> &'static str {
        match self {
            AlgorithmKind::Prim => "Prim's Algorithm",
            AlgorithmKind::Kruskal => "Kruskal's Algorithm",
        }
    }

    pub fn profile(&self) -> &'static AlgorithmProfile {
        match self {
            AlgorithmKind::Prim => &PRIM_PROFILE,
            AlgorithmKind::Kruskal => &KRUSKAL_PROFILE,
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prim" | "prims" => Ok(AlgorithmKind::Prim),
            "kruskal" | "kruskals" => Ok(AlgorithmKind::Kruskal),
            other => Err(format!(
                "Unknown algorithm '{}': expected 'prim' or 'kruskal'",
                other
            )),
        }
    }
}

/// Static characteristics of an algorithm, for side-by-side comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmProfile {
    pub approach: &'static str,
    pub data_structure: &'static str,
    pub time_complexity: &'static str,
    pub best_for: &'static str,
}

impl AlgorithmProfile {
    /// `(aspect, value)` rows in display order.
    pub fn rows(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Approach", self.approach),
            ("Data Structure", self.data_structure),
            ("Time Complexity", self.time_complexity),
            ("Best for", self.best_for),
        ]
    }
}

static PRIM_PROFILE: AlgorithmProfile = AlgorithmProfile {
    approach: "Vertex-based (grows from a starting vertex)",
    data_structure: "Priority Queue (Min-Heap)",
    time_complexity: "O(E log V) with priority queue",
    best_for: "Dense graphs (many edges)",
};

static KRUSKAL_PROFILE: AlgorithmProfile = AlgorithmProfile {
    approach: "Edge-based (considers edges globally)",
    data_structure: "Union-Find (Disjoint Set)",
    time_complexity: "O(E log E) dominated by sorting",
    best_for: "Sparse graphs (few edges)",
};

/// Run the selected algorithm.
pub fn run_algorithm(kind: AlgorithmKind, graph: &Graph, config: MstConfig) -> Result<MstResult> {
    match kind {
        AlgorithmKind::Prim => Prim::run(graph, config),
        AlgorithmKind::Kruskal => Kruskal::run(graph, config),
    }
}

mod prim;
pub use prim::{Prim, PrimEngine, PrimState};

mod kruskal;
pub use kruskal::{Kruskal, KruskalEngine, KruskalState};
