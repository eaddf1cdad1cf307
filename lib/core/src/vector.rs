/// Padding value appended to the shorter code vector of a pair.
pub const PAD_CODE: i64 = 0;

/// Ordered character codes of a single word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharCodeVector {
    codes: Vec<i64>,
}

impl CharCodeVector {
    #[inline]
    #[must_use]
    pub fn new(codes: Vec<i64>) -> Self {
        Self { codes }
    }

    /// Map every character of `word` to its code point
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        Self {
            codes: word.chars().map(|c| i64::from(u32::from(c))).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.codes
    }

    /// Right-pad with [`PAD_CODE`] up to `len`. Never truncates.
    pub fn pad_to(&mut self, len: usize) {
        if self.codes.len() < len {
            self.codes.resize(len, PAD_CODE);
        }
    }

    /// Pad the shorter of the two vectors so both share the same length
    pub fn equalize(a: &mut CharCodeVector, b: &mut CharCodeVector) {
        let len = a.len().max(b.len());
        a.pad_to(len);
        b.pad_to(len);
    }

    /// Signed elementwise difference `other - self`.
    ///
    /// Both vectors must already have equal length (see [`CharCodeVector::equalize`]);
    /// extra trailing elements of the longer one are ignored otherwise.
    #[must_use]
    pub fn difference(&self, other: &CharCodeVector) -> Vec<i64> {
        self.codes
            .iter()
            .zip(other.codes.iter())
            .map(|(a, b)| b - a)
            .collect()
    }
}

impl From<&str> for CharCodeVector {
    fn from(word: &str) -> Self {
        Self::from_word(word)
    }
}
