//! Text analysis module for Jargon.
//!
//! This module provides lossless tokenization, dictionary-driven n-gram
//! lemmatization and the pipelines that combine them.
//!
//! - [`tokenizer`] splits a reader into word, punctuation and space tokens
//! - [`dictionary`] recognizes runs of words and names their canonical form
//! - [`token_filter`] transforms token streams, most notably [`NgramFilter`]
//! - [`analyzer`] chains a tokenizer with filters

pub mod analyzer;
pub mod dictionary;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use dictionary::{Dictionary, DictionaryMatch};
pub use token::{IntoTokenStream, Token, TokenStream, TokenStreamExt};
pub use token_filter::{Filter, NgramFilter};
pub use tokenizer::{TechProseTokenizer, Tokenizer};
