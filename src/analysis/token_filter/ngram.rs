//! The n-gram matching filter.
//!
//! [`NgramFilter`] scans a token stream for runs of words that a
//! [`Dictionary`] recognizes and replaces each run with a single lemma. It is
//! the one engine behind every dictionary-based transformation: synonyms,
//! contractions, numbers, stop words, stems and ASCII folding.
//!
//! # Algorithm
//!
//! The filter keeps two queues, `buffer` (undecided tokens) and `outgoing`
//! (decided tokens). To produce output it:
//!
//! 1. moves leading punctuation and spaces straight to `outgoing`
//! 2. fills `buffer` with up to `max_gram_length` words, stopping after a
//!    punctuation token
//! 3. asks the dictionary for the longest match over the leading run of words
//!    and spaces
//! 4. on a match, emits the canonical as a lemma (nothing, if it is empty)
//!    and drops the matched tokens; otherwise emits the first buffered token
//!    verbatim and tries again one token later
//!
//! Matches never span punctuation, and tokens outside a match are passed
//! through unchanged and in order.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::dictionary::{SynonymsConfig, SynonymsDictionary};
//! use jargon::analysis::token::TokenStreamExt;
//! use jargon::analysis::token_filter::{Filter, NgramFilter};
//! use jargon::analysis::tokenizer::{TechProseTokenizer, Tokenizer};
//!
//! let config = SynonymsConfig::new().with_mapping("ruby on rails", "ruby-on-rails");
//! let filter = NgramFilter::new(SynonymsDictionary::new(config));
//!
//! let tokens = TechProseTokenizer::new().tokenize_str("I love ruby on rails today");
//! let text = filter.filter(tokens).unwrap().into_text().unwrap();
//! assert_eq!(text, "I love ruby-on-rails today");
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use log::trace;

use crate::analysis::dictionary::Dictionary;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{JargonError, Result};

/// A filter that replaces dictionary matches with lemmas.
#[derive(Clone)]
pub struct NgramFilter {
    dictionary: Arc<dyn Dictionary>,
}

impl std::fmt::Debug for NgramFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NgramFilter")
            .field("dictionary", &self.dictionary.name())
            .finish()
    }
}

impl NgramFilter {
    /// Create a filter over `dictionary`.
    pub fn new<D: Dictionary + 'static>(dictionary: D) -> Self {
        Self::with_shared(Arc::new(dictionary))
    }

    /// Create a filter over a dictionary shared with other filters.
    pub fn with_shared(dictionary: Arc<dyn Dictionary>) -> Self {
        NgramFilter { dictionary }
    }

    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        &self.dictionary
    }
}

impl Filter for NgramFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        self.dictionary.prepare()?;
        Ok(Box::new(NgramTokens::new(
            tokens,
            Arc::clone(&self.dictionary),
        )))
    }

    fn name(&self) -> &'static str {
        self.dictionary.name()
    }
}

/// The stream returned by [`NgramFilter::filter`].
pub struct NgramTokens<'a> {
    incoming: TokenStream<'a>,
    dictionary: Arc<dyn Dictionary>,
    max_gram_length: usize,
    buffer: VecDeque<Token>,
    outgoing: VecDeque<Token>,
    exhausted: bool,
    error: Option<JargonError>,
}

impl<'a> NgramTokens<'a> {
    fn new(incoming: TokenStream<'a>, dictionary: Arc<dyn Dictionary>) -> Self {
        let max_gram_length = dictionary.max_gram_length().max(1);
        NgramTokens {
            incoming,
            dictionary,
            max_gram_length,
            buffer: VecDeque::new(),
            outgoing: VecDeque::new(),
            exhausted: false,
            error: None,
        }
    }

    /// Pull one token from upstream. Upstream is not polled again once it ends.
    fn pull(&mut self) -> Result<Option<Token>> {
        if self.exhausted {
            return Ok(None);
        }
        match self.incoming.next() {
            Some(token) => token.map(Some),
            None => {
                self.exhausted = true;
                Ok(None)
            }
        }
    }

    /// Move leading punctuation and spaces to `outgoing`, then pull words into
    /// `buffer` until it holds `max_gram_length` words, ends with punctuation,
    /// or upstream is exhausted.
    fn fill(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            match self.pull()? {
                None => return Ok(()),
                Some(token) if !token.is_word() => {
                    self.outgoing.push_back(token);
                    return Ok(());
                }
                Some(token) => self.buffer.push_back(token),
            }
        } else {
            while self.buffer.front().is_some_and(|t| !t.is_word()) {
                if let Some(token) = self.buffer.pop_front() {
                    self.outgoing.push_back(token);
                }
            }
            if self.buffer.is_empty() {
                return Ok(());
            }
        }

        if self.buffer.iter().any(Token::is_punct) {
            return Ok(());
        }

        let mut words = self.buffer.iter().filter(|t| t.is_word()).count();
        while words < self.max_gram_length {
            let Some(token) = self.pull()? else {
                break;
            };
            let punct = token.is_punct();
            if token.is_word() {
                words += 1;
            }
            self.buffer.push_back(token);
            if punct {
                break;
            }
        }
        Ok(())
    }

    /// Length of the leading run of words and spaces in `buffer`, ending on
    /// the `max_gram_length`-th word.
    fn word_run_len(&self) -> usize {
        let mut words = 0;
        let mut len = 0;
        for (i, token) in self.buffer.iter().enumerate() {
            if token.is_punct() {
                break;
            }
            if token.is_word() {
                words += 1;
                len = i + 1;
                if words == self.max_gram_length {
                    break;
                }
            }
        }
        len
    }

    fn advance(&mut self) -> Result<()> {
        loop {
            self.fill()?;

            let len = self.word_run_len();
            if len == 0 {
                break;
            }

            let run = &self.buffer.make_contiguous()[..len];
            match self.dictionary.search(run) {
                Some(found) => {
                    trace!(
                        "{}: {} tokens -> {:?}",
                        self.dictionary.name(),
                        found.consumed,
                        found.canonical
                    );
                    let consumed = found.consumed.clamp(1, len);
                    if !found.canonical.is_empty() {
                        self.outgoing.push_back(Token::lemma(found.canonical));
                    }
                    self.buffer.drain(..consumed);
                }
                None => {
                    if let Some(token) = self.buffer.pop_front() {
                        self.outgoing.push_back(token);
                    }
                }
            }

            if self.buffer.is_empty() && !self.outgoing.is_empty() {
                break;
            }
        }

        self.outgoing.extend(self.buffer.drain(..));
        Ok(())
    }
}

impl Iterator for NgramTokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.outgoing.pop_front() {
            return Some(Ok(token));
        }
        if let Some(e) = self.error.take() {
            self.exhausted = true;
            return Some(Err(e));
        }

        assert!(
            self.buffer.is_empty(),
            "n-gram buffer must be empty between tokens"
        );

        if let Err(e) = self.advance() {
            // Hand out what was read before the failure, then the error.
            self.outgoing.extend(self.buffer.drain(..));
            self.exhausted = true;
            self.error = Some(e);
        }

        match self.outgoing.pop_front() {
            Some(token) => Some(Ok(token)),
            None => self.error.take().map(Err),
        }
    }
}
