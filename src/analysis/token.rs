//! Token types and stream utilities for text analysis.
//!
//! This module defines the core data structures that flow through the
//! analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single unit of text (word, punctuation mark or space) with classification flags
//! - [`TokenStream`] - Boxed, pull-based iterator of `Result<Token>`
//! - [`TokenStreamExt`] - Combinators over token streams (words, lemmas, text output, ...)
//!
//! # Fidelity
//!
//! A tokenizer emits every unit of its input, white space included, so that
//! concatenating the token texts reproduces the input exactly:
//!
//! ```
//! use jargon::analysis::token::TokenStreamExt;
//! use jargon::analysis::tokenizer::{TechProseTokenizer, Tokenizer};
//!
//! let text = "Let's talk about Node.js, C++ and .net!\r\n";
//! let tokens = TechProseTokenizer::new().tokenize_str(text);
//! assert_eq!(tokens.into_text().unwrap(), text);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A token represents a single unit of text after tokenization.
///
/// Tokens are immutable once created. A token is one of:
///
/// - a word: any multi-code-point token, or a single word-constituent code point
/// - punctuation: a single separator code point (`is_punct`)
/// - space: a single white space code point (`is_space`); CR, LF and TAB are
///   punctuation as well, so they break word runs
///
/// Tokens synthesized by a filter to replace one or more original tokens are
/// lemmas (`is_lemma`).
///
/// # Examples
///
/// ```
/// use jargon::analysis::token::Token;
///
/// let word = Token::word("Rails");
/// assert!(!word.is_punct() && !word.is_space());
///
/// let newline = Token::space('\n');
/// assert!(newline.is_punct() && newline.is_space());
///
/// let lemma = Token::lemma("ruby-on-rails");
/// assert!(lemma.is_lemma());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
    punct: bool,
    space: bool,
    lemma: bool,
}

impl Token {
    /// Create a word token.
    pub fn word<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            punct: false,
            space: false,
            lemma: false,
        }
    }

    /// Create a single-code-point punctuation token.
    pub fn punct(c: char) -> Self {
        Token {
            text: c.to_string(),
            punct: true,
            space: false,
            lemma: false,
        }
    }

    /// Create a single-code-point space token.
    ///
    /// CR, LF and TAB are also flagged as punctuation, so they break word runs.
    pub fn space(c: char) -> Self {
        Token {
            text: c.to_string(),
            punct: matches!(c, '\r' | '\n' | '\t'),
            space: true,
            lemma: false,
        }
    }

    /// Create a lemma: a canonical word synthesized to replace one or more tokens.
    pub fn lemma<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            punct: false,
            space: false,
            lemma: true,
        }
    }

    /// Clone this token's classification with new text, marked as a lemma.
    pub fn relemma<S: Into<String>>(&self, text: S) -> Self {
        Token {
            text: text.into(),
            punct: self.punct,
            space: self.space,
            lemma: true,
        }
    }

    /// The text of the token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the token breaks a run of words.
    pub fn is_punct(&self) -> bool {
        self.punct
    }

    /// Whether the token is white space.
    pub fn is_space(&self) -> bool {
        self.space
    }

    /// Whether the token was synthesized by a filter.
    pub fn is_lemma(&self) -> bool {
        self.lemma
    }

    /// Whether the token is a word, i.e. neither punctuation nor space.
    pub fn is_word(&self) -> bool {
        !self.punct && !self.space
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the token, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
///
/// Streams are single-pass and pull-based: nothing upstream runs until the
/// consumer asks for the next token. The first error ends the stream.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Result<Token>> + 'a>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream<'a> {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream<'a>;
}

impl<'a> IntoTokenStream<'a> for Vec<Token> {
    fn into_token_stream(self) -> TokenStream<'a> {
        Box::new(self.into_iter().map(Ok))
    }
}

/// Combinators over [`TokenStream`].
pub trait TokenStreamExt<'a> {
    /// Keep only the tokens matching `predicate`. Errors pass through.
    fn where_token<P>(self, predicate: P) -> TokenStream<'a>
    where
        P: FnMut(&Token) -> bool + 'a;

    /// Keep only words (neither punctuation nor space).
    fn words(self) -> TokenStream<'a>;

    /// Keep only lemmas, i.e. tokens synthesized by a filter.
    fn lemmas(self) -> TokenStream<'a>;

    /// Keep the first occurrence of each distinct token text.
    fn distinct(self) -> TokenStream<'a>;

    /// Apply filters in order.
    fn apply(self, filters: &[Arc<dyn Filter>]) -> Result<TokenStream<'a>>;

    /// Count the tokens, consuming the stream.
    fn count_tokens(self) -> Result<usize>;

    /// Concatenate the token texts, consuming the stream.
    fn into_text(self) -> Result<String>;

    /// Write every token text to `writer`, returning the number of bytes written.
    fn write_to<W: Write>(self, writer: &mut W) -> Result<u64>;
}

impl<'a> TokenStreamExt<'a> for TokenStream<'a> {
    fn where_token<P>(self, mut predicate: P) -> TokenStream<'a>
    where
        P: FnMut(&Token) -> bool + 'a,
    {
        Box::new(self.filter(move |item| match item {
            Ok(token) => predicate(token),
            Err(_) => true,
        }))
    }

    fn words(self) -> TokenStream<'a> {
        self.where_token(Token::is_word)
    }

    fn lemmas(self) -> TokenStream<'a> {
        self.where_token(Token::is_lemma)
    }

    fn distinct(self) -> TokenStream<'a> {
        let mut seen = HashSet::new();
        self.where_token(move |token| seen.insert(token.text().to_string()))
    }

    fn apply(self, filters: &[Arc<dyn Filter>]) -> Result<TokenStream<'a>> {
        let mut tokens = self;
        for filter in filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn count_tokens(self) -> Result<usize> {
        let mut count = 0;
        for token in self {
            token?;
            count += 1;
        }
        Ok(count)
    }

    fn into_text(self) -> Result<String> {
        let mut text = String::new();
        for token in self {
            text.push_str(token?.text());
        }
        Ok(text)
    }

    fn write_to<W: Write>(self, writer: &mut W) -> Result<u64> {
        let mut written = 0u64;
        for token in self {
            let token = token?;
            writer.write_all(token.text().as_bytes())?;
            written += token.len() as u64;
        }
        Ok(written)
    }
}
