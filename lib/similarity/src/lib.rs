//! # MSC Similarity
//!
//! Maximum similarity counter: a bounded score in (0, 1] between two
//! texts, or between two equal-length lists of text fields, computed from
//! character-code distances rather than tokens or embeddings.
//!
//! ## Features
//!
//! - **Normalization**: lowercase, `é`/`è` folding, restricted alphabet `[a-z0-9 ]`
//! - **Equalization**: sentinel padding of word sequences and character codes
//! - **Gaussian kernel**: `exp(-0.5 * x²)` per character code difference
//! - **Explainability**: per-word and per-field score breakdown
//!
//! ## Example
//!
//! ```rust
//! use msc_similarity::SimilarityEngine;
//!
//! let engine = SimilarityEngine::new(false);
//! let score = engine
//!     .similarity("Hello i teach physics in Oxford.", "Hello i teach physics at MIT")
//!     .unwrap();
//! assert!((score - 0.6704).abs() < 1e-3);
//!
//! let fields = engine
//!     .fields_similarity(
//!         &["Hello i teach physics in Oxford.", "england"],
//!         &["Hello i teach physics at MIT", "USA"],
//!     )
//!     .unwrap();
//! assert!((fields - 0.3352).abs() < 1e-3);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Normalizer  │────>│  Equalizer  │────>│   Kernel    │
//! │ (raw→clean) │     │ (word pairs)│     │ (code diffs)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                      ┌─────────────┐           │
//!                      │   Engine    │<──────────┘
//!                      │ (mean/mean) │
//!                      └─────────────┘
//!                             │
//!                      ┌─────────────┐
//!                      │  Explain    │
//!                      │  (reports)  │
//!                      └─────────────┘
//! ```

pub mod config;
pub mod engine;
pub mod equalize;
pub mod explain;
pub mod normalize;

pub use config::EngineConfig;
pub use engine::SimilarityEngine;
pub use equalize::{equalize_texts, word_pairs, Equalization, SENTINEL, SENTINEL_WORD};
pub use explain::{FieldsReport, TextReport, WordScore};
pub use normalize::{normalize, TextNormalizer};

use msc_core::Result;

/// Version tag of the scoring algorithm
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Similarity of two texts with a default engine
pub fn similarity(text1: &str, text2: &str, verbose: bool) -> Result<f64> {
    SimilarityEngine::new(verbose).similarity(text1, text2)
}

/// Mean similarity of two equal-length field lists with a default engine
pub fn similarity_multi_field<S: AsRef<str>>(
    fields1: &[S],
    fields2: &[S],
    verbose: bool,
) -> Result<f64> {
    SimilarityEngine::new(verbose).fields_similarity(fields1, fields2)
}
