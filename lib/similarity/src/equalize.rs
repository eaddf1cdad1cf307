//! Word-count equalization
//!
//! Makes two normalized texts comparable word by word by padding the
//! shorter one with sentinel words. Character-level padding of each word
//! pair happens later, in [`msc_core::CharCodeVector::equalize`].

use serde::{Deserialize, Serialize};

/// Sentinel character used for padding. Never survives normalization.
pub const SENTINEL: char = '\0';

/// A word made of a single sentinel character
pub const SENTINEL_WORD: &str = "\0";

/// How the shorter text is brought to the word count of the longer one
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Equalization {
    /// Append [`SENTINEL_WORD`] entries to the shorter word sequence
    #[default]
    PadWords,
    /// Append a space-joined sentinel block to the end of the shorter
    /// string without a separating space, then pair words by position
    /// up to the shorter split. The block fuses with the last real word.
    TailSentinel,
}

/// Aligned word pairs of two normalized texts
pub fn word_pairs(left: &str, right: &str, strategy: Equalization) -> Vec<(String, String)> {
    match strategy {
        Equalization::PadWords => pad_words(left, right),
        Equalization::TailSentinel => {
            let (left, right) = equalize_texts(left, right);
            left.split(' ')
                .zip(right.split(' '))
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect()
        }
    }
}

/// String-level equalization: counts words by splitting on single spaces
/// and appends the sentinel block to the tail of the shorter text.
pub fn equalize_texts(left: &str, right: &str) -> (String, String) {
    let n1 = left.split(' ').count();
    let n2 = right.split(' ').count();

    let mut left = left.to_string();
    let mut right = right.to_string();
    if n1 > n2 {
        right.push_str(&sentinel_block(n1 - n2));
    } else {
        left.push_str(&sentinel_block(n2 - n1));
    }
    (left, right)
}

fn sentinel_block(n: usize) -> String {
    vec![SENTINEL_WORD; n].join(" ")
}

fn pad_words(left: &str, right: &str) -> Vec<(String, String)> {
    let mut left: Vec<&str> = left.split_whitespace().collect();
    let mut right: Vec<&str> = right.split_whitespace().collect();

    let n = left.len().max(right.len());
    left.resize(n, SENTINEL_WORD);
    right.resize(n, SENTINEL_WORD);

    left.into_iter()
        .zip(right)
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}
