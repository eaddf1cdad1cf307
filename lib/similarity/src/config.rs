//! Engine configuration
//!
//! Serializable so that callers can load it alongside their own settings.

use crate::equalize::Equalization;
use serde::{Deserialize, Serialize};

/// Configuration captured by a [`crate::SimilarityEngine`] at construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Emit per-word diagnostics through `tracing`
    #[serde(default)]
    pub verbose: bool,

    /// Word-count equalization strategy
    #[serde(default)]
    pub equalization: Equalization,
}

impl EngineConfig {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn with_equalization(mut self, equalization: Equalization) -> Self {
        self.equalization = equalization;
        self
    }
}
