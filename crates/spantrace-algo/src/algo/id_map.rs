// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between caller vertex ids and dense algorithm slots.
//!
//! The engines keep their per-vertex state in plain vectors indexed by slot
//! (0..V). Slots are handed out in insertion order, so slot order doubles as
//! the graph's vertex insertion order.

use fxhash::FxHashMap;
use spantrace_common::core::id::VertexId;

/// Bidirectional mapping between [`VertexId`]s and dense slots.
///
/// # Example
///
/// ```ignore
/// let mut id_map = IdMap::new();
/// id_map.insert(VertexId::from("A"));  // slot 0
/// id_map.insert(VertexId::from("B"));  // slot 1
///
/// assert_eq!(id_map.to_slot(&VertexId::from("B")), Some(1));
/// assert_eq!(id_map.to_vertex(0), Some(&VertexId::from("A")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    /// Dense slot -> vertex id
    slot_to_vertex: Vec<VertexId>,
    /// Vertex id -> dense slot
    vertex_to_slot: FxHashMap<VertexId, u32>,
}

impl IdMap {
    /// Create an empty ID map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ID map with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slot_to_vertex: Vec::with_capacity(capacity),
            vertex_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a vertex and return its slot.
    ///
    /// If the vertex already exists, returns the existing slot.
    pub fn insert(&mut self, vertex: VertexId) -> u32 {
        if let Some(&slot) = self.vertex_to_slot.get(&vertex) {
            return slot;
        }

        let slot = self.slot_to_vertex.len() as u32;
        self.vertex_to_slot.insert(vertex.clone(), slot);
        self.slot_to_vertex.push(vertex);
        slot
    }

    /// Get the slot for a vertex.
    #[inline]
    pub fn to_slot(&self, vertex: &VertexId) -> Option<u32> {
        self.vertex_to_slot.get(vertex).copied()
    }

    /// Get the vertex for a slot (panics if out of bounds).
    #[inline]
    pub fn to_vertex_unchecked(&self, slot: u32) -> &VertexId {
        &self.slot_to_vertex[slot as usize]
    }

    /// Number of mapped vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_vertex.len()
    }

    /// Whether the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_vertex.is_empty()
    }

    /// Check if a vertex is in the map.
    #[inline]
    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.vertex_to_slot.contains_key(vertex)
    }

    /// Vertices in slot (insertion) order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.slot_to_vertex
    }
}

impl FromIterator<VertexId> for IdMap {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut map = Self::with_capacity(upper.unwrap_or(lower));

        for vertex in iter {
            map.insert(vertex);
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut map = IdMap::new();

        let a = VertexId::from("A");
        let b = VertexId::Int(7);
        let c = VertexId::from("C");

        assert_eq!(map.insert(a.clone()), 0);
        assert_eq!(map.insert(b.clone()), 1);
        assert_eq!(map.insert(c.clone()), 2);

        // Duplicate insert returns same slot
        assert_eq!(map.insert(a.clone()), 0);
        assert_eq!(map.len(), 3);

        assert_eq!(map.to_slot(&a), Some(0));
        assert_eq!(map.to_slot(&b), Some(1));
        assert_eq!(map.to_slot(&c), Some(2));
        assert_eq!(map.to_slot(&VertexId::from("7")), None);

        assert_eq!(map.to_vertex_unchecked(0), &a);
        assert_eq!(map.to_vertex_unchecked(2), &c);
    }

    #[test]
    fn test_from_iter_preserves_order() {
        let map: IdMap = ["D", "B", "A", "B"].into_iter().map(VertexId::from).collect();
        let labels: Vec<String> = map.vertices().iter().map(|v| v.to_string()).collect();
        assert_eq!(labels, vec!["D", "B", "A"]);
    }
}
