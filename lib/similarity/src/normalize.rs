//! Text normalization
//!
//! Reduces arbitrary input to the alphabet `[a-z0-9 ]` with single spaces
//! between words and no leading or trailing space. Newlines separate
//! words; any other whitespace besides the space is dropped like
//! punctuation.

/// Accented characters folded to ASCII before filtering.
/// Anything else outside the alphabet is dropped.
const ACCENT_FOLDS: &[(char, char)] = &[('é', 'e'), ('è', 'e')];

/// Cleans raw text into a normalized form suitable for character comparison
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize `text`. Accepts any input and is idempotent.
    pub fn normalize(&self, text: &str) -> String {
        let filtered: String = text
            .to_lowercase()
            .chars()
            .map(fold_accent)
            .map(|c| if c == '\n' { ' ' } else { c })
            .filter(|&c| is_retained(c))
            .collect();

        filtered.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Normalize with the default [`TextNormalizer`]
pub fn normalize(text: &str) -> String {
    TextNormalizer.normalize(text)
}

#[inline]
fn fold_accent(c: char) -> char {
    ACCENT_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |&(_, to)| to)
}

#[inline]
fn is_retained(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        assert_eq!(
            normalize("Hello i teach physics in Oxford."),
            "hello i teach physics in oxford"
        );
    }

    #[test]
    fn test_accent_folding() {
        assert_eq!(normalize("Café crème"), "cafe creme");
        assert_eq!(normalize("È"), "e");
        // only é and è are folded
        assert_eq!(normalize("naïve"), "nave");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("  one\ntwo \n\n three  four  "), "one two three four");
    }

    #[test]
    fn test_non_newline_whitespace_dropped() {
        assert_eq!(normalize("a\tb"), "ab");
        assert_eq!(normalize("a\u{a0}b"), "ab");
        assert_eq!(normalize("a\r\nb"), "a b");
        assert_eq!(normalize("one \t two"), "one two");
    }

    #[test]
    fn test_dropped_punctuation_leaves_single_space() {
        assert_eq!(normalize("a . b"), "a b");
        assert_eq!(normalize("a-b"), "ab");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(normalize("Route 66!"), "route 66");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" ?! \n"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  Élan, vital!\n  déjà  vu ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_control_characters_dropped() {
        assert_eq!(normalize("ab\u{0}cd"), "abcd");
    }
}
