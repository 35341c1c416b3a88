// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Model - validated, immutable weighted undirected graph.
//!
//! A `Graph` provides:
//! - Dense vertex indexing (0..V) in insertion order
//! - Edges in insertion order, addressed by [`EdgeId`]
//! - CSR adjacency where each vertex lists its incident edges in edge
//!   insertion order
//!
//! Construction either succeeds with a fully validated graph or fails fast
//! with the first validation error; no partial graph is ever returned.

use crate::algo::IdMap;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use spantrace_common::core::id::{EdgeId, VertexId};
use spantrace_common::{MstError, Result};
use std::fmt;
use tracing::debug;

/// Weighted undirected edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Position in the graph's edge insertion order
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    /// Endpoints ordered so that `(a, b)` and `(b, a)` produce the same key.
    pub fn key(&self) -> (&VertexId, &VertexId) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }

    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &VertexId, b: &VertexId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }

    /// The endpoint opposite to `vertex`.
    pub fn other(&self, vertex: &VertexId) -> Option<&VertexId> {
        if &self.from == vertex {
            Some(&self.to)
        } else if &self.to == vertex {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Short label, e.g. `A-B`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.from, self.to, self.weight)
    }
}

/// Immutable weighted undirected graph.
#[derive(Debug, Clone)]
pub struct Graph {
    id_map: IdMap,
    edges: Vec<Edge>,
    /// Slot endpoints per edge, aligned with `edges`
    endpoints: Vec<(u32, u32)>,
    /// CSR adjacency: slot -> incident (neighbor slot, edge) pairs
    adj_offsets: Vec<u32>,
    adj: Vec<(u32, EdgeId)>,
}

impl Graph {
    /// Build and validate a graph.
    ///
    /// Vertices keep the order they are given in; edges are checked in order
    /// and the first invalid one fails the whole build.
    ///
    /// # Errors
    ///
    /// - `DuplicateVertex` if a vertex id repeats
    /// - `InvalidEdgeEndpoint` if an edge references an unknown vertex
    /// - `SelfLoop` if both endpoints are the same vertex
    /// - `NonFiniteWeight` / `NegativeWeight` for NaN, infinite or negative weights
    /// - `DuplicateEdge` if two edges share the same unordered endpoint pair
    pub fn build<V, I, E>(vertices: I, edges: E) -> Result<Self>
    where
        V: Into<VertexId>,
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V, f64)>,
    {
        let vertices = vertices.into_iter();
        let mut id_map = IdMap::with_capacity(vertices.size_hint().0);
        for vertex in vertices {
            let vertex = vertex.into();
            if id_map.contains(&vertex) {
                return Err(MstError::DuplicateVertex { vertex });
            }
            id_map.insert(vertex);
        }

        let mut validated = Vec::new();
        let mut endpoints = Vec::new();
        let mut seen_pairs: FxHashMap<(u32, u32), usize> = FxHashMap::default();

        for (edge_index, (from, to, weight)) in edges.into_iter().enumerate() {
            let (from, to) = (from.into(), to.into());
            let u = id_map
                .to_slot(&from)
                .ok_or_else(|| MstError::InvalidEdgeEndpoint {
                    edge_index,
                    vertex: from.clone(),
                })?;
            let v = id_map
                .to_slot(&to)
                .ok_or_else(|| MstError::InvalidEdgeEndpoint {
                    edge_index,
                    vertex: to.clone(),
                })?;

            if u == v {
                return Err(MstError::SelfLoop {
                    edge_index,
                    vertex: from,
                });
            }
            if !weight.is_finite() {
                return Err(MstError::NonFiniteWeight { edge_index, weight });
            }
            if weight < 0.0 {
                return Err(MstError::NegativeWeight { edge_index, weight });
            }

            let pair = (u.min(v), u.max(v));
            if let Some(&first_index) = seen_pairs.get(&pair) {
                return Err(MstError::DuplicateEdge {
                    edge_index,
                    first_index,
                    a: from,
                    b: to,
                });
            }
            seen_pairs.insert(pair, edge_index);

            validated.push(Edge {
                id: EdgeId::new(validated.len() as u32),
                from,
                to,
                // -0.0 becomes 0.0 so weight bit patterns order like the weights
                weight: weight + 0.0,
            });
            endpoints.push((u, v));
        }

        let graph = Self::from_validated(id_map, validated, endpoints);
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        Ok(graph)
    }

    /// Start a [`GraphBuilder`].
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    fn from_validated(id_map: IdMap, edges: Vec<Edge>, endpoints: Vec<(u32, u32)>) -> Self {
        let n = id_map.len();

        let mut degree = vec![0u32; n];
        for &(u, v) in &endpoints {
            degree[u as usize] += 1;
            degree[v as usize] += 1;
        }

        let mut adj_offsets = vec![0u32; n + 1];
        for i in 0..n {
            adj_offsets[i + 1] = adj_offsets[i] + degree[i];
        }

        // Filling in edge order keeps each vertex's list in edge insertion order
        let mut cursor: Vec<u32> = adj_offsets[..n].to_vec();
        let mut adj = vec![(0u32, EdgeId::new(0)); endpoints.len() * 2];
        for (i, &(u, v)) in endpoints.iter().enumerate() {
            let eid = EdgeId::new(i as u32);
            adj[cursor[u as usize] as usize] = (v, eid);
            cursor[u as usize] += 1;
            adj[cursor[v as usize] as usize] = (u, eid);
            cursor[v as usize] += 1;
        }

        Self {
            id_map,
            edges,
            endpoints,
            adj_offsets,
            adj,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.id_map.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id_map.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[VertexId] {
        self.id_map.vertices()
    }

    /// All edges in insertion order.
    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.id_map.contains(vertex)
    }

    /// Incident edges of `vertex` with the opposite endpoint, in edge
    /// insertion order. Empty for unknown vertices.
    pub fn neighbors(&self, vertex: &VertexId) -> Vec<(&VertexId, &Edge)> {
        match self.id_map.to_slot(vertex) {
            Some(slot) => self
                .neighbor_slots(slot)
                .iter()
                .map(|&(other, eid)| {
                    (
                        self.id_map.to_vertex_unchecked(other),
                        &self.edges[eid.index()],
                    )
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Look up a vertex by its display label, e.g. `"A"` or `"12"`.
    pub fn find_by_label(&self, label: &str) -> Option<&VertexId> {
        self.id_map
            .vertices()
            .iter()
            .find(|vertex| vertex.to_string() == label)
    }

    /// Resolve the start vertex for a run.
    ///
    /// `None` selects the first inserted vertex. A configured id that is not
    /// present verbatim is matched by label, so `Int(1)` finds a vertex named
    /// `"1"` and vice versa. Returns `Ok(None)` only for an empty graph with
    /// no configured start.
    pub fn resolve_start(&self, start: Option<&VertexId>) -> Result<Option<u32>> {
        match start {
            None if self.is_empty() => Ok(None),
            None => Ok(Some(0)),
            Some(vertex) => self
                .id_map
                .to_slot(vertex)
                .or_else(|| {
                    self.find_by_label(&vertex.to_string())
                        .and_then(|found| self.id_map.to_slot(found))
                })
                .map(Some)
                .ok_or_else(|| MstError::UnknownStartVertex {
                    vertex: vertex.clone(),
                }),
        }
    }

    /// Slot of a vertex.
    #[inline]
    pub fn to_slot(&self, vertex: &VertexId) -> Option<u32> {
        self.id_map.to_slot(vertex)
    }

    /// Vertex of a slot (panics if out of bounds).
    #[inline]
    pub fn to_vertex(&self, slot: u32) -> &VertexId {
        self.id_map.to_vertex_unchecked(slot)
    }

    /// Incident (neighbor slot, edge) pairs of a vertex (by slot).
    #[inline]
    pub fn neighbor_slots(&self, slot: u32) -> &[(u32, EdgeId)] {
        let start = self.adj_offsets[slot as usize] as usize;
        let end = self.adj_offsets[slot as usize + 1] as usize;
        &self.adj[start..end]
    }

    /// Slot endpoints of an edge, in the edge's own orientation.
    #[inline]
    pub fn endpoints(&self, id: EdgeId) -> (u32, u32) {
        self.endpoints[id.index()]
    }

    /// Edge by id (panics if out of bounds).
    #[inline]
    pub fn edge_unchecked(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }
}

/// Incremental construction of a [`Graph`].
///
/// Collects vertices and edges without checking them; all validation happens
/// in [`GraphBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertices: Vec<VertexId>,
    edges: Vec<(VertexId, VertexId, f64)>,
}

impl GraphBuilder {
    pub fn vertex(mut self, vertex: impl Into<VertexId>) -> Self {
        self.vertices.push(vertex.into());
        self
    }

    pub fn vertices<V: Into<VertexId>>(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(vertices.into_iter().map(Into::into));
        self
    }

    pub fn edge(
        mut self,
        from: impl Into<VertexId>,
        to: impl Into<VertexId>,
        weight: f64,
    ) -> Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    pub fn build(self) -> Result<Graph> {
        Graph::build(self.vertices, self.edges)
    }
}
