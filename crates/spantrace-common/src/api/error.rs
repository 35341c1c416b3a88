// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::id::VertexId;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MstError {
    /// Edge references a vertex that was not declared
    #[error("Edge #{edge_index} references unknown vertex '{vertex}'")]
    InvalidEdgeEndpoint { edge_index: usize, vertex: VertexId },

    /// Two edges share the same unordered endpoint pair
    #[error("Edge #{edge_index} duplicates edge #{first_index} between '{a}' and '{b}'")]
    DuplicateEdge {
        edge_index: usize,
        first_index: usize,
        a: VertexId,
        b: VertexId,
    },

    #[error("Edge #{edge_index} has negative weight {weight}")]
    NegativeWeight { edge_index: usize, weight: f64 },

    #[error("Edge #{edge_index} has non-finite weight {weight}")]
    NonFiniteWeight { edge_index: usize, weight: f64 },

    #[error("Edge #{edge_index} is a self-loop on '{vertex}'")]
    SelfLoop { edge_index: usize, vertex: VertexId },

    #[error("Vertex '{vertex}' is declared more than once")]
    DuplicateVertex { vertex: VertexId },

    #[error("Start vertex '{vertex}' is not in the graph")]
    UnknownStartVertex { vertex: VertexId },

    /// No spanning tree exists. `unreachable` holds the vertices that are not
    /// connected to `start`, in graph insertion order.
    #[error(
        "{algorithm}: graph is disconnected, {} vertices unreachable from '{start}'",
        .unreachable.len()
    )]
    DisconnectedGraph {
        algorithm: &'static str,
        start: VertexId,
        unreachable: Vec<VertexId>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl MstError {
    /// Whether the error was raised while validating graph input.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            MstError::InvalidEdgeEndpoint { .. }
                | MstError::DuplicateEdge { .. }
                | MstError::NegativeWeight { .. }
                | MstError::NonFiniteWeight { .. }
                | MstError::SelfLoop { .. }
                | MstError::DuplicateVertex { .. }
        )
    }

    /// Unreachable vertices if this is a `DisconnectedGraph` failure.
    pub fn unreachable(&self) -> Option<&[VertexId]> {
        match self {
            MstError::DisconnectedGraph { unreachable, .. } => Some(unreachable),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_message() {
        let err = MstError::DisconnectedGraph {
            algorithm: "kruskal",
            start: VertexId::from("A"),
            unreachable: vec![VertexId::from("C"), VertexId::from("D")],
        };
        assert_eq!(
            err.to_string(),
            "kruskal: graph is disconnected, 2 vertices unreachable from 'A'"
        );
        assert_eq!(err.unreachable().map(|u| u.len()), Some(2));
        assert!(!err.is_construction_error());
    }

    #[test]
    fn test_construction_errors() {
        let err = MstError::NegativeWeight {
            edge_index: 4,
            weight: -1.5,
        };
        assert!(err.is_construction_error());
        assert_eq!(err.to_string(), "Edge #4 has negative weight -1.5");
    }
}
