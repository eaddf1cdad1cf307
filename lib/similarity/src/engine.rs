//! Similarity engine
//!
//! Orchestrates normalization, equalization and kernel scoring:
//!
//! ```text
//! text pair ──normalize──> equalize words ──per word pair──> pad codes ──> kernel mean
//!                                                                             │
//! field pairs ──────────────── mean of text scores <──── mean of word scores <┘
//! ```

use crate::config::EngineConfig;
use crate::equalize::word_pairs;
use crate::explain::{FieldsReport, TextReport, WordScore};
use crate::normalize::TextNormalizer;
use msc_core::{mean, CharCodeVector, Error, GaussianKernel, Result};
use rayon::prelude::*;
use tracing::{debug, info};

/// Computes bounded character-code similarity between texts.
///
/// Stateless across calls; a single engine can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    config: EngineConfig,
    normalizer: TextNormalizer,
    kernel: GaussianKernel,
}

impl SimilarityEngine {
    /// Engine with default equalization and the given verbosity
    pub fn new(verbose: bool) -> Self {
        Self::with_config(EngineConfig::new(verbose))
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::new(),
            kernel: GaussianKernel::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Version tag of the scoring algorithm
    pub fn version(&self) -> &'static str {
        crate::VERSION
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Score two words by their padded character codes.
    ///
    /// Words are taken as given, without normalization. Fails when both
    /// words are empty.
    pub fn word_similarity(&self, left: &str, right: &str) -> Result<f64> {
        self.score_word(left, right).map(|w| w.score)
    }

    /// Similarity of two raw texts in (0, 1]
    pub fn similarity(&self, left: &str, right: &str) -> Result<f64> {
        self.explain_text(left, right).map(|r| r.score)
    }

    /// Score two raw texts and keep the per-word breakdown
    pub fn explain_text(&self, left: &str, right: &str) -> Result<TextReport> {
        let left = self.normalizer.normalize(left);
        let right = self.normalizer.normalize(right);

        let words = word_pairs(&left, &right, self.config.equalization)
            .into_iter()
            .map(|(a, b)| self.score_word(&a, &b))
            .collect::<Result<Vec<_>>>()?;

        let scores: Vec<f64> = words.iter().map(|w| w.score).collect();
        let score = mean(&scores, "text")?;

        if self.config.verbose {
            info!(left = %left, right = %right, words = words.len(), score, "text pair scored");
        } else {
            debug!(words = words.len(), score, "text pair scored");
        }

        Ok(TextReport {
            left,
            right,
            words,
            score,
        })
    }

    /// Mean similarity of aligned fields.
    ///
    /// Both lists must have the same length.
    pub fn fields_similarity<S: AsRef<str>>(&self, left: &[S], right: &[S]) -> Result<f64> {
        self.explain_fields(left, right).map(|r| r.score)
    }

    /// Score aligned fields and keep the per-field breakdown
    pub fn explain_fields<S: AsRef<str>>(&self, left: &[S], right: &[S]) -> Result<FieldsReport> {
        if left.len() != right.len() {
            return Err(Error::FieldCountMismatch {
                left: left.len(),
                right: right.len(),
            });
        }

        let fields = left
            .iter()
            .zip(right)
            .map(|(a, b)| self.explain_text(a.as_ref(), b.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let scores: Vec<f64> = fields.iter().map(|f| f.score).collect();
        let score = mean(&scores, "field list")?;

        if self.config.verbose {
            info!(fields = fields.len(), score, "field pairs scored");
        } else {
            debug!(fields = fields.len(), score, "field pairs scored");
        }

        Ok(FieldsReport { fields, score })
    }

    /// Score independent text pairs in parallel, preserving order
    pub fn similarity_batch<S>(&self, pairs: &[(S, S)]) -> Vec<Result<f64>>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(a, b)| self.similarity(a.as_ref(), b.as_ref()))
            .collect()
    }

    fn score_word(&self, left: &str, right: &str) -> Result<WordScore> {
        let mut a = CharCodeVector::from_word(left);
        let mut b = CharCodeVector::from_word(right);
        CharCodeVector::equalize(&mut a, &mut b);

        let differences = a.difference(&b);
        let score = self.kernel.aggregate(&differences)?;

        if self.config.verbose {
            info!(
                left = %left.escape_default(),
                right = %right.escape_default(),
                differences = ?differences,
                score,
                "word pair scored"
            );
        }

        Ok(WordScore {
            left: left.to_string(),
            right: right.to_string(),
            differences,
            score,
        })
    }
}
