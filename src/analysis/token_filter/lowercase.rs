//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::token::TokenStreamExt;
//! use jargon::analysis::token_filter::{Filter, LowercaseFilter};
//! use jargon::analysis::tokenizer::{TechProseTokenizer, Tokenizer};
//!
//! let tokens = TechProseTokenizer::new().tokenize_str("Hello WORLD");
//! let text = LowercaseFilter::new().filter(tokens).unwrap().into_text().unwrap();
//! assert_eq!(text, "hello world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Tokens whose text changes are re-emitted as lemmas; all others pass
/// through untouched.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(|token| {
            let token = token?;
            let lower = token.text().to_lowercase();
            if lower == token.text() {
                Ok(token)
            } else {
                Ok(token.relemma(lower))
            }
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
