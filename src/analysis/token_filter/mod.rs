//! Token filter implementations for token transformation.
//!
//! A filter takes a token stream and returns a new one. Filters never
//! reorder, duplicate or drop tokens, except where they replace a run of
//! tokens with a single lemma (or remove it, for an empty canonical).

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    ///
    /// Filters are lazy: the returned stream pulls from `tokens` on demand.
    /// Errors returned here happen before any token is read, such as a
    /// dictionary that fails to build.
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod ngram;
pub mod normalize;

pub use lowercase::LowercaseFilter;
pub use ngram::NgramFilter;
pub use normalize::{NormalizationForm, NormalizeFilter};
