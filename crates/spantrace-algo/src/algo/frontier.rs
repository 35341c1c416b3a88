// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Priority Frontier for Prim's algorithm.
//!
//! Holds at most one entry per outside vertex: the cheapest edge seen so far
//! that connects it to the tree. Built on a `BinaryHeap` with lazy deletion;
//! superseded heap items are skipped when they surface.
//!
//! Ordering is `(weight, discovery)`: among equal weights the vertex that
//! entered the frontier first is extracted first. A relaxation with an equal
//! weight keeps the earlier-discovered edge.

use spantrace_common::core::id::EdgeId;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Best known connection of an outside vertex to the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierEntry {
    /// Slot of the outside vertex
    pub vertex: u32,
    pub edge: EdgeId,
    pub weight: f64,
}

/// Outcome of [`Frontier::relax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relax {
    /// First edge seen for this vertex.
    Inserted,
    /// Strictly cheaper than the previous best; entry replaced.
    Improved,
    /// Not cheaper; the earlier edge is kept.
    Kept,
    /// Vertex was already extracted.
    Closed,
}

#[derive(Debug, Clone, Copy)]
struct Best {
    edge: EdgeId,
    weight: f64,
    discovered: u64,
}

/// Min-priority frontier keyed by vertex slot.
#[derive(Debug, Clone)]
pub struct Frontier {
    best: Vec<Option<Best>>,
    closed: Vec<bool>,
    heap: BinaryHeap<Reverse<(u64, u64, u32)>>,
    next_discovery: u64,
    len: usize,
}

impl Frontier {
    /// Frontier over vertex slots `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            best: vec![None; n],
            closed: vec![false; n],
            heap: BinaryHeap::new(),
            next_discovery: 0,
            len: 0,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current best entry for `vertex`, if it is on the frontier.
    pub fn get(&self, vertex: u32) -> Option<FrontierEntry> {
        self.best[vertex as usize].map(|b| FrontierEntry {
            vertex,
            edge: b.edge,
            weight: b.weight,
        })
    }

    /// Offer `edge` as a connection for `vertex`.
    ///
    /// `weight` must be finite and non-negative: its bit pattern is the heap
    /// key.
    pub fn relax(&mut self, vertex: u32, edge: EdgeId, weight: f64) -> Relax {
        debug_assert!(weight.is_finite() && weight >= 0.0);
        let v = vertex as usize;
        if self.closed[v] {
            return Relax::Closed;
        }

        let outcome = match self.best[v] {
            None => {
                let discovered = self.next_discovery;
                self.next_discovery += 1;
                self.best[v] = Some(Best {
                    edge,
                    weight,
                    discovered,
                });
                self.len += 1;
                Relax::Inserted
            }
            Some(current) if weight < current.weight => {
                self.best[v] = Some(Best {
                    edge,
                    weight,
                    discovered: current.discovered,
                });
                Relax::Improved
            }
            Some(_) => return Relax::Kept,
        };

        if let Some(b) = self.best[v] {
            self.heap
                .push(Reverse((b.weight.to_bits(), b.discovered, vertex)));
        }
        outcome
    }

    /// Remove and return the cheapest entry. The vertex is closed afterwards.
    pub fn extract_min(&mut self) -> Option<FrontierEntry> {
        while let Some(Reverse((w_bits, _, vertex))) = self.heap.pop() {
            let v = vertex as usize;
            let Some(best) = self.best[v] else {
                continue;
            };
            // Stale item from before an improvement
            if best.weight.to_bits() != w_bits {
                continue;
            }

            self.best[v] = None;
            self.closed[v] = true;
            self.len -= 1;
            return Some(FrontierEntry {
                vertex,
                edge: best.edge,
                weight: best.weight,
            });
        }
        None
    }

    /// Mark `vertex` as part of the tree without extracting it (the start
    /// vertex of a run).
    pub fn close(&mut self, vertex: u32) {
        let v = vertex as usize;
        if self.best[v].take().is_some() {
            self.len -= 1;
        }
        self.closed[v] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(i: u32) -> EdgeId {
        EdgeId::new(i)
    }

    #[test]
    fn test_extract_in_weight_order() {
        let mut frontier = Frontier::new(4);
        frontier.relax(1, e(0), 5.0);
        frontier.relax(2, e(1), 1.0);
        frontier.relax(3, e(2), 3.0);
        assert_eq!(frontier.len(), 3);

        let order: Vec<u32> = std::iter::from_fn(|| frontier.extract_min())
            .map(|entry| entry.vertex)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!(frontier.is_empty());
        assert_eq!(frontier.extract_min(), None);
    }

    #[test]
    fn test_relax_strictly_less_only() {
        let mut frontier = Frontier::new(2);
        assert_eq!(frontier.relax(1, e(0), 4.0), Relax::Inserted);
        assert_eq!(frontier.relax(1, e(1), 4.0), Relax::Kept);
        assert_eq!(frontier.relax(1, e(2), 6.0), Relax::Kept);
        assert_eq!(frontier.get(1).map(|entry| entry.edge), Some(e(0)));

        assert_eq!(frontier.relax(1, e(3), 2.0), Relax::Improved);
        assert_eq!(frontier.len(), 1);

        let entry = frontier.extract_min().unwrap();
        assert_eq!(entry.edge, e(3));
        assert_eq!(entry.weight, 2.0);
        // The superseded heap item is skipped
        assert_eq!(frontier.extract_min(), None);
    }

    #[test]
    fn test_ties_go_to_first_discovered() {
        let mut frontier = Frontier::new(4);
        frontier.relax(3, e(0), 2.0);
        frontier.relax(1, e(1), 5.0);
        frontier.relax(2, e(2), 2.0);
        // Vertex 1 improves to the tied weight but keeps its discovery rank
        frontier.relax(1, e(3), 2.0);

        let order: Vec<u32> = std::iter::from_fn(|| frontier.extract_min())
            .map(|entry| entry.vertex)
            .collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_closed_vertices_are_ignored() {
        let mut frontier = Frontier::new(3);
        frontier.close(0);
        assert_eq!(frontier.relax(0, e(0), 1.0), Relax::Closed);

        frontier.relax(1, e(1), 1.0);
        frontier.extract_min();
        assert_eq!(frontier.relax(1, e(2), 0.5), Relax::Closed);
        assert!(frontier.is_empty());
    }
}
