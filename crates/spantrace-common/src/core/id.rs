// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Caller-supplied vertex identifier.
///
/// Vertices are opaque to the engines: they are either integers or strings,
/// compared by value. In JSON the two forms map to numbers and strings
/// respectively.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexId {
    Int(i64),
    Name(String),
}

impl From<&str> for VertexId {
    fn from(val: &str) -> Self {
        Self::Name(val.to_string())
    }
}

impl From<String> for VertexId {
    fn from(val: String) -> Self {
        Self::Name(val)
    }
}

impl From<i64> for VertexId {
    fn from(val: i64) -> Self {
        Self::Int(val)
    }
}

impl From<i32> for VertexId {
    fn from(val: i32) -> Self {
        Self::Int(val as i64)
    }
}

impl From<u32> for VertexId {
    fn from(val: u32) -> Self {
        Self::Int(val as i64)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexId::Int(v) => write!(f, "Vertex({})", v),
            VertexId::Name(name) => write!(f, "Vertex({:?})", name),
        }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexId::Int(v) => write!(f, "{}", v),
            VertexId::Name(name) => f.write_str(name),
        }
    }
}

impl FromStr for VertexId {
    type Err = Infallible;

    /// Integers parse to `Int`, anything else is kept verbatim as `Name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(VertexId::Int)
            .unwrap_or_else(|_| VertexId::Name(s.to_string())))
    }
}

/// Edge identifier: position of the edge in the graph's insertion order.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for EdgeId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
