//! Tokenizer for English technical prose.
//!
//! Splits text into words, punctuation and white space while keeping
//! technical terms such as `F#`, `C++`, `.net`, `Node.js`, `#hashtag`,
//! `@handle` and `first.last+@example.com` intact. Every code point of the
//! input ends up in exactly one token, so the output can be concatenated back
//! into the input.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::token::TokenStreamExt;
//! use jargon::analysis::tokenizer::{TechProseTokenizer, Tokenizer};
//!
//! let tokenizer = TechProseTokenizer::new();
//! let words: Vec<String> = tokenizer
//!     .tokenize_str("I work with C++, F# and .net.")
//!     .words()
//!     .map(|t| t.map(|t| t.into_text()))
//!     .collect::<jargon::error::Result<_>>()
//!     .unwrap();
//!
//! assert_eq!(words, vec!["I", "work", "with", "C++", "F#", "and", ".net"]);
//! ```

use std::io::{self, BufRead};

use log::warn;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::chars::CharReader;
use crate::analysis::tokenizer::punct::{
    is_leading_exception, is_mid_exception, is_punct, is_separator, is_terminator,
    is_unicode_symbol,
};
use crate::error::Result;

/// A lossless tokenizer for technical prose.
///
/// Code points are classified as white space, punctuation (which terminates
/// words) or word characters. Letters, digits, Unicode symbols and the
/// punctuation `- # @ * % _ / \` are word characters.
///
/// Two kinds of punctuation are allowed into words:
///
/// - a leading `.` followed by a word character starts a word (`.net`)
/// - `.`, `'`, `’`, `:`, `?` and `&` inside a word continue it when followed
///   by a word character (`Node.js`, `O'Brien`, `http://`, `AT&T`)
///
/// A single-code-point token made of a Unicode symbol, like a lone `+`, is
/// flagged as punctuation.
#[derive(Clone, Debug, Default)]
pub struct TechProseTokenizer;

impl TechProseTokenizer {
    /// Create a new tech prose tokenizer.
    pub fn new() -> Self {
        TechProseTokenizer
    }
}

impl Tokenizer for TechProseTokenizer {
    fn tokenize<'a>(&self, reader: Box<dyn BufRead + 'a>) -> TokenStream<'a> {
        Box::new(TechProseTokens::new(reader))
    }

    fn name(&self) -> &'static str {
        "tech_prose"
    }
}

/// Streaming lexer behind [`TechProseTokenizer`].
///
/// Reads one code point at a time with a single code point of lookahead.
/// A code point that ends a word is held back and dispatched again as the
/// start of the next token.
pub struct TechProseTokens<R: BufRead> {
    chars: CharReader<R>,
    word: String,
    redispatch: Option<char>,
    done: bool,
}

impl<R: BufRead> TechProseTokens<R> {
    pub fn new(reader: R) -> Self {
        TechProseTokens {
            chars: CharReader::new(reader),
            word: String::new(),
            redispatch: None,
            done: false,
        }
    }

    fn read(&mut self) -> io::Result<Option<char>> {
        match self.redispatch.take() {
            Some(c) => Ok(Some(c)),
            None => self.chars.read_char(),
        }
    }

    /// Scan from a token boundary.
    fn lex_boundary(&mut self) -> io::Result<Option<Token>> {
        let Some(c) = self.read()? else {
            return Ok(None);
        };

        if c.is_whitespace() {
            return Ok(Some(Token::space(c)));
        }

        if is_punct(c) {
            if is_leading_exception(c) && !is_terminator(self.chars.peek_char()?) {
                self.word.push(c);
                return self.lex_word();
            }
            return Ok(Some(Token::punct(c)));
        }

        self.word.push(c);
        self.lex_word()
    }

    /// Scan the rest of a word whose first code point is already buffered.
    fn lex_word(&mut self) -> io::Result<Option<Token>> {
        loop {
            let Some(c) = self.read()? else {
                return Ok(Some(self.flush()));
            };

            if is_mid_exception(c) {
                if is_terminator(self.chars.peek_char()?) {
                    self.redispatch = Some(c);
                    return Ok(Some(self.flush()));
                }
                self.word.push(c);
                continue;
            }

            if is_separator(c) {
                self.redispatch = Some(c);
                return Ok(Some(self.flush()));
            }

            self.word.push(c);
        }
    }

    fn flush(&mut self) -> Token {
        let text = std::mem::take(&mut self.word);
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_unicode_symbol(c) => Token::punct(c),
            _ => Token::word(text),
        }
    }
}

impl<R: BufRead> Iterator for TechProseTokens<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.lex_boundary() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                self.word.clear();
                warn!("Tokenization stopped on read error: {e}");
                Some(Err(e.into()))
            }
        }
    }
}
