// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod id;
}

// Re-exports for convenience
pub use api::error::{MstError, Result};
pub use config::{MstConfig, TraceVerbosity};
pub use core::id::{EdgeId, VertexId};
