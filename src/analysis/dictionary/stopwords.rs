//! Stop word removal.

use ahash::AHashSet;

use crate::analysis::dictionary::Dictionary;

/// Default English stop words list.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A dictionary that removes stop words.
///
/// Stop words are found with an empty canonical, so the n-gram filter drops
/// them from the stream. Surrounding spaces are left in place.
///
/// # Examples
///
/// ```
/// use jargon::analysis::dictionary::{Dictionary, StopWords};
///
/// let stop_words = StopWords::english();
/// assert_eq!(stop_words.lookup(&["the"]).as_deref(), Some(""));
/// assert_eq!(stop_words.lookup(&["The"]).as_deref(), Some(""));
/// assert_eq!(stop_words.lookup(&["quick"]), None);
/// ```
#[derive(Clone, Debug)]
pub struct StopWords {
    words: AHashSet<String>,
    ignore_case: bool,
}

impl StopWords {
    /// Create a stop word dictionary from a list of words.
    pub fn new<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|word| {
                let word = word.into();
                if ignore_case { word.to_lowercase() } else { word }
            })
            .collect();
        StopWords { words, ignore_case }
    }

    /// The default English stop words, ignoring case.
    pub fn english() -> Self {
        Self::new(DEFAULT_ENGLISH_STOP_WORDS.iter().copied(), true)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.ignore_case {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl Dictionary for StopWords {
    fn lookup(&self, grams: &[&str]) -> Option<String> {
        match grams {
            [gram] if self.contains(gram) => Some(String::new()),
            _ => None,
        }
    }

    fn max_gram_length(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "stopwords"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive() {
        let stop_words = StopWords::new(["Foo", "bar"], false);
        assert!(stop_words.contains("Foo"));
        assert!(!stop_words.contains("foo"));
        assert_eq!(stop_words.lookup(&["bar"]).as_deref(), Some(""));
        assert_eq!(stop_words.lookup(&["BAR"]), None);
    }

    #[test]
    fn test_ignore_case() {
        let stop_words = StopWords::new(["Foo"], true);
        assert!(stop_words.contains("FOO"));
        assert!(stop_words.contains("foo"));
    }

    #[test]
    fn test_english() {
        let stop_words = StopWords::english();
        assert_eq!(stop_words.len(), DEFAULT_ENGLISH_STOP_WORDS.len());
        assert_eq!(stop_words.lookup(&["the", "end"]), None);
    }
}
