//! Tokenizer implementations for text analysis.

use std::io::BufRead;

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizers read lazily: no input is consumed until the returned stream is
/// pulled. Read errors end the stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the text read from `reader`.
    fn tokenize<'a>(&self, reader: Box<dyn BufRead + 'a>) -> TokenStream<'a>;

    /// Tokenize an in-memory string.
    fn tokenize_str<'a>(&self, text: &'a str) -> TokenStream<'a> {
        self.tokenize(Box::new(text.as_bytes()))
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod chars;
pub mod punct;
pub mod tech_prose;
pub mod whitespace;

pub use tech_prose::TechProseTokenizer;
pub use whitespace::WhitespaceTokenizer;
