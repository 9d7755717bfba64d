//! Synonym dictionary mapping phrase lists to canonical terms.
//!
//! Mappings are given as `"synonym, synonym, ..." → canonical`. Each synonym
//! is tokenized with the [`TechProseTokenizer`] and indexed in a [`RuneTrie`],
//! so lookups match whole tokens with the configured case and code point
//! insensitivity.
//!
//! The trie is built once, on first use.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::dictionary::{Dictionary, SynonymsConfig, SynonymsDictionary};
//!
//! let config = SynonymsConfig::new()
//!     .with_mapping("ruby on rails, rails", "ruby-on-rails")
//!     .with_ignore_case(true)
//!     .with_ignore([' ', '-']);
//! let synonyms = SynonymsDictionary::new(config);
//!
//! assert_eq!(synonyms.lookup(&["Ruby", "on", "Rails"]).as_deref(), Some("ruby-on-rails"));
//! assert_eq!(synonyms.max_gram_length(), 3);
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::dictionary::trie::RuneTrie;
use crate::analysis::dictionary::{Dictionary, DictionaryMatch};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{TechProseTokenizer, Tokenizer};
use crate::error::{JargonError, Result};

/// Configuration for a [`SynonymsDictionary`].
///
/// Deserializes from JSON:
///
/// ```json
/// {
///   "mappings": { "ruby on rails, rails": "ruby-on-rails" },
///   "ignore_case": true,
///   "ignore": [" ", "-"]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymsConfig {
    /// Comma-separated synonym lists, each mapped to its canonical term.
    pub mappings: BTreeMap<String, String>,

    /// Match regardless of case.
    #[serde(default)]
    pub ignore_case: bool,

    /// Code points skipped when matching, such as `' '`, `'-'` or `'.'`.
    #[serde(default)]
    pub ignore: Vec<char>,
}

impl SynonymsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `"synonym, synonym, ..." → canonical` mapping.
    pub fn with_mapping<S, C>(mut self, synonyms: S, canonical: C) -> Self
    where
        S: Into<String>,
        C: Into<String>,
    {
        self.mappings.insert(synonyms.into(), canonical.into());
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_ignore<I: IntoIterator<Item = char>>(mut self, ignore: I) -> Self {
        self.ignore.extend(ignore);
        self
    }
}

#[derive(Debug)]
struct Built {
    trie: RuneTrie,
    max_gram_length: usize,
}

/// A trie-backed dictionary of synonyms.
#[derive(Debug)]
pub struct SynonymsDictionary {
    config: SynonymsConfig,
    built: OnceLock<std::result::Result<Built, String>>,
}

impl SynonymsDictionary {
    /// Create a dictionary. Construction of the trie is deferred to first use;
    /// call [`Dictionary::prepare`] to build it and surface errors early.
    pub fn new(config: SynonymsConfig) -> Self {
        SynonymsDictionary {
            config,
            built: OnceLock::new(),
        }
    }

    /// Load a dictionary configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            JargonError::dictionary(format!(
                "Failed to read synonyms file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: SynonymsConfig = serde_json::from_str(&content).map_err(|e| {
            JargonError::dictionary(format!(
                "Failed to parse synonyms JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SynonymsConfig {
        &self.config
    }

    /// Number of distinct normalized phrases, building the trie if needed.
    pub fn len(&self) -> usize {
        self.built().map_or(0, |built| built.trie.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn built(&self) -> Option<&Built> {
        self.built
            .get_or_init(|| self.build().map_err(|e| e.to_string()))
            .as_ref()
            .ok()
    }

    fn build(&self) -> Result<Built> {
        let tokenizer = TechProseTokenizer::new();
        let mut trie = RuneTrie::new(self.config.ignore_case, self.config.ignore.iter().copied());
        let mut max_gram_length = 1;

        for (synonyms, canonical) in &self.config.mappings {
            let tokens: Vec<Token> = tokenizer.tokenize_str(synonyms).collect::<Result<_>>()?;

            for phrase in tokens.split(|t| t.is_punct() && t.text() == ",") {
                let phrase = trim_spaces(phrase);
                if phrase.is_empty() {
                    continue;
                }

                let text: String = phrase.iter().map(Token::text).collect();
                if trie.is_blank(phrase.iter().map(Token::text)) {
                    return Err(JargonError::dictionary(format!(
                        "the synonym {text:?}, from the {{{synonyms:?}: {canonical:?}}} mapping, \
                         is empty when normalized"
                    )));
                }

                if let Some(existing) = trie.add(phrase.iter().map(Token::text), canonical)
                    && existing != *canonical
                {
                    return Err(JargonError::dictionary(format!(
                        "the synonym {text:?}, from the {{{synonyms:?}: {canonical:?}}} mapping, \
                         would overwrite an earlier mapping to {existing:?}"
                    )));
                }

                let words = phrase.iter().filter(|t| t.is_word()).count();
                max_gram_length = max_gram_length.max(words);
            }
        }

        debug!(
            "Built synonyms dictionary: {} phrases, max gram length {}",
            trie.len(),
            max_gram_length
        );

        Ok(Built {
            trie,
            max_gram_length,
        })
    }
}

fn trim_spaces(tokens: &[Token]) -> &[Token] {
    let start = tokens.iter().position(|t| !t.is_space()).unwrap_or(tokens.len());
    let end = tokens.iter().rposition(|t| !t.is_space()).map_or(start, |i| i + 1);
    &tokens[start..end]
}

impl Dictionary for SynonymsDictionary {
    fn lookup(&self, grams: &[&str]) -> Option<String> {
        let mut run = Vec::with_capacity(grams.len() * 2);
        for (i, gram) in grams.iter().enumerate() {
            if i > 0 {
                run.push(Token::space(' '));
            }
            run.push(Token::word(*gram));
        }

        let (canonical, consumed) = self.built()?.trie.search(&run)?;
        (consumed == run.len()).then(|| canonical.to_string())
    }

    fn max_gram_length(&self) -> usize {
        self.built().map_or(1, |built| built.max_gram_length)
    }

    fn prepare(&self) -> Result<()> {
        match self.built.get_or_init(|| self.build().map_err(|e| e.to_string())) {
            Ok(_) => Ok(()),
            Err(msg) => Err(JargonError::dictionary(msg.clone())),
        }
    }

    fn search(&self, run: &[Token]) -> Option<DictionaryMatch> {
        let (canonical, consumed) = self.built()?.trie.search(run)?;
        Some(DictionaryMatch {
            canonical: canonical.to_string(),
            consumed,
        })
    }

    fn name(&self) -> &'static str {
        "synonyms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn node_config() -> SynonymsConfig {
        SynonymsConfig::new()
            .with_mapping("Node.js, nodeJS, iojs", "node.js")
            .with_ignore_case(true)
            .with_ignore(['.', '-', '/'])
    }

    #[test]
    fn test_insensitive_lookup() {
        let synonyms = SynonymsDictionary::new(node_config());
        for gram in ["NodeJS", "node.js", "Node-JS", "IOJS"] {
            assert_eq!(synonyms.lookup(&[gram]).as_deref(), Some("node.js"), "{gram}");
        }
        assert_eq!(synonyms.lookup(&["node", "js"]), None);
        assert_eq!(synonyms.len(), 2);
    }

    #[test]
    fn test_lookup_requires_full_match() {
        let config = SynonymsConfig::new().with_mapping("ruby", "ruby");
        let synonyms = SynonymsDictionary::new(config);
        assert_eq!(synonyms.lookup(&["ruby"]).as_deref(), Some("ruby"));
        assert_eq!(synonyms.lookup(&["ruby", "gems"]), None);
    }

    #[test]
    fn test_max_gram_length() {
        let config = SynonymsConfig::new()
            .with_mapping("ruby on rails, rails", "ruby-on-rails")
            .with_mapping("go", "golang");
        let synonyms = SynonymsDictionary::new(config);
        assert_eq!(synonyms.max_gram_length(), 3);
    }

    #[test]
    fn test_empty_synonyms_are_skipped() {
        let config = SynonymsConfig::new().with_mapping("rust, , rustlang,", "rust");
        let synonyms = SynonymsDictionary::new(config);
        synonyms.prepare().unwrap();
        assert_eq!(synonyms.len(), 2);
    }

    #[test]
    fn test_blank_when_normalized_is_an_error() {
        let config = SynonymsConfig::new()
            .with_mapping("--", "dash")
            .with_ignore(['-']);
        let synonyms = SynonymsDictionary::new(config);

        let err = synonyms.prepare().unwrap_err();
        assert!(err.to_string().contains("empty when normalized"));
        assert_eq!(synonyms.max_gram_length(), 1);
        assert_eq!(synonyms.lookup(&["--"]), None);
    }

    #[test]
    fn test_conflicting_mapping_is_an_error() {
        let config = SynonymsConfig::new()
            .with_mapping("js", "javascript")
            .with_mapping("JS", "json")
            .with_ignore_case(true);
        let synonyms = SynonymsDictionary::new(config);

        let err = synonyms.prepare().unwrap_err();
        assert!(err.to_string().contains("would overwrite"));
    }

    #[test]
    fn test_duplicate_with_same_canonical_is_allowed() {
        let config = SynonymsConfig::new()
            .with_mapping("js", "javascript")
            .with_mapping("JS, javascript", "javascript")
            .with_ignore_case(true);
        assert!(SynonymsDictionary::new(config).prepare().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"mappings": {{"postgres, postgresql": "postgresql"}}, "ignore_case": true, "ignore": [" "]}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let synonyms = SynonymsDictionary::load_from_file(file.path()).unwrap();
        assert!(synonyms.config().ignore_case);
        assert_eq!(synonyms.lookup(&["Postgre", "SQL"]).as_deref(), Some("postgresql"));
    }

    #[test]
    fn test_load_from_file_errors() {
        assert!(SynonymsDictionary::load_from_file("/nonexistent/synonyms.json").is_err());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        file.flush().unwrap();
        let err = SynonymsDictionary::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, JargonError::Dictionary(_)));
    }
}
