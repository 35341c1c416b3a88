// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    AlgorithmKind, AlgorithmProfile, Kruskal, KruskalEngine, KruskalState, MstAlgorithm, Prim,
    PrimEngine, PrimState, run_algorithm,
};
pub use algo::compare::{Comparison, compare};
pub use algo::cursor::{Frame, TraceCursor};
pub use algo::disjoint_set::DisjointSet;
pub use algo::frontier::{Frontier, FrontierEntry, Relax};
pub use algo::graph::{Edge, Graph, GraphBuilder};
pub use algo::input::{EdgeInput, GraphInput};
pub use algo::trace::{MstResult, Step, StepReason};
pub use spantrace_common::{EdgeId, MstConfig, MstError, Result, TraceVerbosity, VertexId};
