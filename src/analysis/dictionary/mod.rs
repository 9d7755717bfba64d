//! Dictionaries that map runs of words to canonical forms.
//!
//! A [`Dictionary`] is consulted by the n-gram filter
//! ([`NgramFilter`](crate::analysis::token_filter::NgramFilter)) with runs of
//! word tokens and interleaved spaces. Dictionaries are explicit values: build
//! one, wrap it in a filter and add the filter to a pipeline.
//!
//! # Available Dictionaries
//!
//! - [`SynonymsDictionary`] - phrase lists mapped to canonicals, backed by a [`RuneTrie`]
//! - [`tech_tags`] - built-in synonyms for common technology terms
//! - [`Contractions`] - expands English contractions ("don't" → "do not")
//! - [`Numbers`] - spelled-out and formatted numbers ("three hundred" → "300")
//! - [`StopWords`] - removes common words
//! - [`Stems`] - reduces words to their stems
//! - [`AsciiFold`] - folds accented characters to ASCII ("café" → "cafe")

use crate::analysis::token::Token;
use crate::error::Result;

pub mod ascii;
pub mod contractions;
pub mod numbers;
pub mod stem;
pub mod stopwords;
pub mod synonyms;
pub mod tags;
pub mod trie;

pub use ascii::AsciiFold;
pub use contractions::Contractions;
pub use numbers::Numbers;
pub use stem::{PorterStemmer, Stemmer, Stems};
pub use stopwords::StopWords;
pub use synonyms::{SynonymsConfig, SynonymsDictionary};
pub use tags::tech_tags;
pub use trie::RuneTrie;

/// The result of a successful dictionary search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictionaryMatch {
    /// Replacement text. Empty means the matched tokens are removed.
    pub canonical: String,
    /// Number of leading tokens of the run (words and spaces) covered by the match.
    pub consumed: usize,
}

/// A mapping from short sequences of words to canonical strings.
///
/// Implementations are read-only once constructed and may be shared across
/// threads.
pub trait Dictionary: Send + Sync {
    /// Look up a sequence of words ("grams").
    ///
    /// Returns `None` when the sequence is not in the dictionary. `Some("")`
    /// means the sequence is known and should be removed.
    fn lookup(&self, grams: &[&str]) -> Option<String>;

    /// The largest number of words a single lookup can match.
    fn max_gram_length(&self) -> usize;

    /// Complete any deferred construction, reporting build errors.
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Find the longest match at the start of `run`.
    ///
    /// `run` holds word tokens with interleaved space tokens and begins with a
    /// word. The default implementation looks up the first *n* words for *n*
    /// from [`max_gram_length`](Dictionary::max_gram_length) down to one.
    fn search(&self, run: &[Token]) -> Option<DictionaryMatch> {
        let words: Vec<(usize, &str)> = run
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_word())
            .map(|(i, token)| (i, token.text()))
            .take(self.max_gram_length())
            .collect();

        let grams: Vec<&str> = words.iter().map(|&(_, text)| text).collect();
        (1..=grams.len()).rev().find_map(|n| {
            self.lookup(&grams[..n]).map(|canonical| DictionaryMatch {
                canonical,
                consumed: words[n - 1].0 + 1,
            })
        })
    }

    /// Get the name of this dictionary (for debugging and configuration).
    fn name(&self) -> &'static str;
}
