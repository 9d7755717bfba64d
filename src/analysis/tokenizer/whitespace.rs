//! Whitespace tokenizer implementation.

use std::io::{self, BufRead};

use log::warn;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::chars::CharReader;
use crate::error::Result;

/// A tokenizer that splits text on white space.
///
/// Each white space code point is its own space token and every maximal run
/// of other code points is a word, punctuation included. No input is dropped.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, reader: Box<dyn BufRead + 'a>) -> TokenStream<'a> {
        Box::new(WhitespaceTokens {
            chars: CharReader::new(reader),
            done: false,
        })
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

struct WhitespaceTokens<R: BufRead> {
    chars: CharReader<R>,
    done: bool,
}

impl<R: BufRead> WhitespaceTokens<R> {
    fn lex(&mut self) -> io::Result<Option<Token>> {
        let Some(c) = self.chars.read_char()? else {
            return Ok(None);
        };
        if c.is_whitespace() {
            return Ok(Some(Token::space(c)));
        }

        let mut word = String::from(c);
        while let Some(next) = self.chars.peek_char()? {
            if next.is_whitespace() {
                break;
            }
            word.push(next);
            self.chars.read_char()?;
        }
        Ok(Some(Token::word(word)))
    }
}

impl<R: BufRead> Iterator for WhitespaceTokens<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lex() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                warn!("Tokenization stopped on read error: {e}");
                Some(Err(e.into()))
            }
        }
    }
}
