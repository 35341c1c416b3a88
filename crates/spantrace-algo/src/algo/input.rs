// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! JSON graph input.
//!
//! ```json
//! {
//!   "vertices": ["A", "B", "C"],
//!   "edges": [
//!     {"from": "A", "to": "B", "weight": 1},
//!     {"from": "B", "to": "C", "weight": 2.5}
//!   ]
//! }
//! ```
//!
//! Vertex ids may be strings or integers. Parsing only checks the shape;
//! graph validation happens in [`Graph::build`].

use crate::algo::Graph;
use serde::{Deserialize, Serialize};
use spantrace_common::Result;
use spantrace_common::core::id::VertexId;
use std::path::Path;

/// One `(from, to, weight)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeInput {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Graph construction request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphInput {
    pub vertices: Vec<VertexId>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
}

impl GraphInput {
    pub fn into_graph(self) -> Result<Graph> {
        Graph::build(
            self.vertices,
            self.edges.into_iter().map(|e| (e.from, e.to, e.weight)),
        )
    }
}

impl From<&Graph> for GraphInput {
    fn from(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertices().to_vec(),
            edges: graph
                .all_edges()
                .iter()
                .map(|e| EdgeInput {
                    from: e.from.clone(),
                    to: e.to.clone(),
                    weight: e.weight,
                })
                .collect(),
        }
    }
}

impl TryFrom<GraphInput> for Graph {
    type Error = spantrace_common::MstError;

    fn try_from(input: GraphInput) -> Result<Self> {
        input.into_graph()
    }
}

impl Graph {
    /// Parse and validate a JSON graph.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let input: GraphInput = serde_json::from_str(json)?;
        input.into_graph()
    }

    /// Read, parse and validate a JSON graph file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to the JSON input format.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&GraphInput::from(self))?)
    }
}
