//! Explainability for similarity scores
//!
//! Breaks a score down into the word pairs and fields it was averaged
//! from. Scores in a report are exactly the ones the engine returns.

use serde::Serialize;

/// Score of one aligned word pair
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WordScore {
    /// Left word, possibly a sentinel placeholder
    pub left: String,
    /// Right word, possibly a sentinel placeholder
    pub right: String,
    /// Signed code differences `right - left` after padding
    pub differences: Vec<i64>,
    /// Mean kernel weight of the differences
    pub score: f64,
}

/// Score of one text pair with per-word breakdown
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextReport {
    /// Normalized left text
    pub left: String,
    /// Normalized right text
    pub right: String,
    pub words: Vec<WordScore>,
    /// Mean of the word scores
    pub score: f64,
}

/// Score of a multi-field comparison with per-field breakdown
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldsReport {
    pub fields: Vec<TextReport>,
    /// Mean of the field scores
    pub score: f64,
}

impl TextReport {
    /// The word pair with the lowest score, if any
    pub fn weakest_word(&self) -> Option<&WordScore> {
        self.words
            .iter()
            .min_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FieldsReport {
    /// Index of the field contributing least to the score
    pub fn weakest_field(&self) -> Option<usize> {
        self.fields
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
