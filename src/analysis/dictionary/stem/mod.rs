//! Stemming dictionaries.

pub mod porter;

pub use porter::PorterStemmer;

use crate::analysis::dictionary::Dictionary;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// A dictionary that maps each word to its stem.
///
/// A word is found only when stemming changes it, so stems that equal the
/// input pass through untouched.
///
/// # Examples
///
/// ```
/// use jargon::analysis::dictionary::{Dictionary, Stems};
///
/// let stems = Stems::english();
/// assert_eq!(stems.lookup(&["connections"]).as_deref(), Some("connect"));
/// assert_eq!(stems.lookup(&["connect"]), None);
/// ```
pub struct Stems {
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for Stems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stems")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Stems {
    /// Create a stems dictionary with a custom stemmer.
    pub fn new(stemmer: Box<dyn Stemmer>) -> Self {
        Stems { stemmer }
    }

    /// Create a stems dictionary using the Porter stemmer.
    pub fn english() -> Self {
        Self::new(Box::new(PorterStemmer::new()))
    }
}

impl Default for Stems {
    fn default() -> Self {
        Self::english()
    }
}

impl Dictionary for Stems {
    fn lookup(&self, grams: &[&str]) -> Option<String> {
        let [gram] = grams else {
            return None;
        };
        let stem = self.stemmer.stem(gram);
        (stem != *gram).then_some(stem)
    }

    fn max_gram_length(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "stems"
    }
}
