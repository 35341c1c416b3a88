// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Step-tracing Minimum Spanning Tree engines.
//!
//! # Architecture
//!
//! A validated, immutable [`Graph`] is handed to one of two engines:
//!
//! - **Prim**: grows a tree from a start vertex, driven by a [`Frontier`]
//!   holding the cheapest known edge into each outside vertex.
//! - **Kruskal**: scans all edges in ascending weight order, using a
//!   [`DisjointSet`] to reject edges that would close a cycle.
//!
//! Each run yields an [`MstResult`]: the accepted edges, the total cost and
//! the ordered decision [`Step`]s. Both engines break ties deterministically,
//! so identical input always produces an identical trace.
//!
//! # Example
//!
//! ```ignore
//! use spantrace_algo::{Graph, MstConfig, Prim, MstAlgorithm};
//!
//! let graph = Graph::builder()
//!     .vertices(["A", "B", "C"])
//!     .edge("A", "B", 1.0)
//!     .edge("B", "C", 2.0)
//!     .build()?;
//!
//! let result = Prim::run(&graph, MstConfig::default())?;
//! for step in &result.steps {
//!     println!("{}", step);
//! }
//! ```

mod id_map;

pub mod algorithms;
pub mod compare;
pub mod cursor;
pub mod disjoint_set;
pub mod frontier;
pub mod graph;
pub mod input;
pub mod sample;
pub mod trace;

pub use disjoint_set::DisjointSet;
pub use frontier::Frontier;
pub use graph::{Edge, Graph};
pub use id_map::IdMap;
pub use trace::{MstResult, Step};

#[cfg(test)]
pub mod test_utils;
