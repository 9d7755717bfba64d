//! # Jargon
//!
//! A lossless tokenizer and lemmatizer for English technical prose.
//!
//! ## Features
//!
//! - Tokenization that keeps tech terms such as "C++", "Node.js" and
//!   ".net" intact and reproduces its input byte for byte
//! - One n-gram matching engine for every dictionary: synonyms,
//!   technology tags, contractions, spelled-out numbers, stop words, stems
//!   and ASCII folding
//! - Pull-based streaming: memory stays bounded by the longest phrase
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use jargon::analysis::dictionary::{Contractions, Dictionary, tech_tags};
//! use jargon::analysis::token::TokenStreamExt;
//!
//! let dictionaries: Vec<Arc<dyn Dictionary>> = vec![Arc::new(tech_tags()), Arc::new(Contractions)];
//! let text = jargon::lemmatize_str("We don't use Ruby on Rails", &dictionaries)
//!     .unwrap()
//!     .into_text()
//!     .unwrap();
//! assert_eq!(text, "We do not use ruby-on-rails");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

use std::sync::Arc;

use crate::analysis::dictionary::Dictionary;
use crate::analysis::token::{TokenStream, TokenStreamExt};
use crate::analysis::token_filter::{Filter, NgramFilter};
use crate::analysis::tokenizer::{TechProseTokenizer, Tokenizer};
use crate::error::Result;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize `text` as technical prose.
pub fn tokenize_str(text: &str) -> TokenStream<'_> {
    TechProseTokenizer::new().tokenize_str(text)
}

/// Tokenize `text` and lemmatize it with each dictionary in turn.
pub fn lemmatize_str<'a>(
    text: &'a str,
    dictionaries: &[Arc<dyn Dictionary>],
) -> Result<TokenStream<'a>> {
    let filters: Vec<Arc<dyn Filter>> = dictionaries
        .iter()
        .map(|dictionary| {
            Arc::new(NgramFilter::with_shared(Arc::clone(dictionary))) as Arc<dyn Filter>
        })
        .collect();
    tokenize_str(text).apply(&filters)
}
