// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Side-by-side Prim / Kruskal runs on the same graph.

use crate::algo::algorithms::{Kruskal, MstAlgorithm, Prim};
use crate::algo::{Graph, MstResult};
use serde::Serialize;
use spantrace_common::{MstConfig, Result};
use tracing::{debug, instrument};

/// Both results plus how they relate.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub prim: MstResult,
    pub kruskal: MstResult,
    /// Total costs agree (always true for correct engines)
    pub costs_match: bool,
    /// Same unordered edge set (may be false under weight ties)
    pub same_tree: bool,
}

/// Run both engines on `graph`.
///
/// The runs share nothing but the read-only graph and execute on the rayon
/// pool in parallel. If either fails the Prim error is reported first; a
/// disconnected graph fails both with the same unreachable set.
#[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn compare(graph: &Graph, config: MstConfig) -> Result<Comparison> {
    let (prim, kruskal) = rayon::join(
        || Prim::run(graph, config.clone()),
        || Kruskal::run(graph, config.clone()),
    );
    let (prim, kruskal) = (prim?, kruskal?);

    let comparison = Comparison {
        costs_match: prim.same_cost(&kruskal),
        same_tree: prim.same_tree(&kruskal),
        prim,
        kruskal,
    };
    debug!(
        costs_match = comparison.costs_match,
        same_tree = comparison.same_tree,
        "compared engines"
    );
    Ok(comparison)
}
