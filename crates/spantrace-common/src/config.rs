// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::id::VertexId;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Environment variable selecting the trace verbosity (`full` / `decisions`).
pub const VERBOSITY_ENV: &str = "SPANTRACE_VERBOSITY";

/// Environment variable overriding the start vertex.
pub const START_ENV: &str = "SPANTRACE_START";

/// How much of Prim's neighbor scanning ends up in the step trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceVerbosity {
    /// Accepted edges plus every edge rejected because both endpoints are
    /// already in the tree. Each edge of a connected graph appears exactly
    /// once, which gives Prim's trace the same length as Kruskal's.
    #[default]
    Full,
    /// Accepted edges only. Rejections are absorbed by frontier relaxation.
    Decisions,
}

impl TraceVerbosity {
    pub fn records_rejections(&self) -> bool {
        matches!(self, TraceVerbosity::Full)
    }
}

impl fmt::Display for TraceVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceVerbosity::Full => f.write_str("full"),
            TraceVerbosity::Decisions => f.write_str("decisions"),
        }
    }
}

impl FromStr for TraceVerbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(TraceVerbosity::Full),
            "decisions" => Ok(TraceVerbosity::Decisions),
            other => Err(format!(
                "Invalid trace verbosity '{}': expected 'full' or 'decisions'",
                other
            )),
        }
    }
}

/// Engine configuration shared by Prim and Kruskal runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MstConfig {
    /// Trace verbosity for Prim's engine (default: full)
    pub verbosity: TraceVerbosity,

    /// Start vertex for Prim's engine (default: first inserted vertex).
    /// Also the reference vertex for disconnected-graph reports.
    pub start: Option<VertexId>,
}

impl MstConfig {
    /// Build a config from `SPANTRACE_VERBOSITY` and `SPANTRACE_START`.
    ///
    /// Unset values fall back to the defaults. An unparseable verbosity is
    /// logged as a warning and also falls back.
    pub fn from_env() -> Self {
        let verbosity = verbosity_or_default(env::var(VERBOSITY_ENV).ok().as_deref());
        let start = env::var(START_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| s.trim().parse().ok());
        Self { verbosity, start }
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: TraceVerbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: impl Into<VertexId>) -> Self {
        self.start = Some(start.into());
        self
    }
}

fn verbosity_or_default(raw: Option<&str>) -> TraceVerbosity {
    match raw.map(str::parse::<TraceVerbosity>) {
        None => TraceVerbosity::default(),
        Some(Ok(verbosity)) => verbosity,
        Some(Err(e)) => {
            warn!(var = VERBOSITY_ENV, "{}, using default", e);
            TraceVerbosity::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_parse() {
        assert_eq!("full".parse::<TraceVerbosity>(), Ok(TraceVerbosity::Full));
        assert_eq!(
            " Decisions ".parse::<TraceVerbosity>(),
            Ok(TraceVerbosity::Decisions)
        );
        assert!("loud".parse::<TraceVerbosity>().is_err());
    }

    #[test]
    fn test_builder() {
        let config = MstConfig::default()
            .with_verbosity(TraceVerbosity::Decisions)
            .with_start("B");
        assert_eq!(config.verbosity, TraceVerbosity::Decisions);
        assert_eq!(config.start, Some(VertexId::from("B")));
        assert!(MstConfig::default().verbosity.records_rejections());
    }

    #[test]
    fn test_unparseable_verbosity_falls_back() {
        assert_eq!(verbosity_or_default(None), TraceVerbosity::Full);
        assert_eq!(
            verbosity_or_default(Some("decisions")),
            TraceVerbosity::Decisions
        );
        assert_eq!(verbosity_or_default(Some("loud")), TraceVerbosity::Full);
    }
}
