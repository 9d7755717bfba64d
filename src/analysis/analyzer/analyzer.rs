//! Core analyzer trait definition.
//!
//! An analyzer is a complete text processing pipeline: it tokenizes its input
//! and passes the resulting stream through a chain of filters.
//!
//! ```text
//! Reader → Analyzer → Token Stream → Writer
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use std::io::BufRead;
//!
//! use jargon::analysis::analyzer::Analyzer;
//! use jargon::analysis::token::TokenStream;
//! use jargon::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//! use jargon::error::Result;
//!
//! struct Verbatim;
//!
//! impl Analyzer for Verbatim {
//!     fn analyze<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>> {
//!         Ok(WhitespaceTokenizer::new().tokenize(reader))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "verbatim"
//!     }
//! }
//! ```

use std::io::BufRead;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a configured analyzer can be shared
/// between threads, each analyzing its own input.
pub trait Analyzer: Send + Sync {
    /// Analyze everything `reader` yields and return a stream of tokens.
    ///
    /// The stream is lazy; read errors surface as `Err` items. An `Err`
    /// return means the pipeline could not be set up at all, for example
    /// because a dictionary failed to build.
    fn analyze<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>>;

    /// Analyze an in-memory string.
    fn analyze_str<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        self.analyze(Box::new(text.as_bytes()))
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
