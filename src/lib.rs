//! # MSC
//!
//! Maximum similarity counter: a bounded similarity score between two
//! texts, built from a Gaussian kernel over character code differences.
//!
//! A score of 1.0 means the normalized texts are identical; it decays
//! towards 0 as aligned characters drift apart in code value.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! msc --left "Hello i teach physics in Oxford." --right "Hello i teach physics at MIT"
//! msc --left "Paris" --left "France" --right "paris" --right "FRANCE" --json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use msc::prelude::*;
//!
//! let score = similarity("Café", "cafe", false).unwrap();
//! assert_eq!(score, 1.0);
//!
//! let err = similarity("", "", false).unwrap_err();
//! assert!(err.is_invalid_input());
//! ```
//!
//! ## Crate Structure
//!
//! - `msc-core` - character code vectors, Gaussian kernel, errors
//! - `msc-similarity` - normalizer, equalizer, engine, explain reports

// Re-export core types
pub use msc_core::{CharCodeVector, Error, GaussianKernel, Result, DEFAULT_BANDWIDTH};

// Re-export the engine
pub use msc_similarity::{
    equalize_texts, normalize, similarity, similarity_multi_field, EngineConfig, Equalization,
    FieldsReport, SimilarityEngine, TextNormalizer, TextReport, WordScore, VERSION,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        normalize, similarity, similarity_multi_field, EngineConfig, Equalization, Error,
        Result, SimilarityEngine,
    };
}
