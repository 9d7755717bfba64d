//! Integration tests for tech-prose tokenization

use std::io::{self, BufRead, BufReader, Read};

use jargon::analysis::token::{Token, TokenStreamExt};
use jargon::analysis::tokenizer::{TechProseTokenizer, Tokenizer, WhitespaceTokenizer};
use jargon::error::Result;

fn tokens(text: &str) -> Result<Vec<Token>> {
    TechProseTokenizer::new().tokenize_str(text).collect()
}

fn texts(text: &str) -> Result<Vec<String>> {
    Ok(tokens(text)?.into_iter().map(Token::into_text).collect())
}

#[test]
fn test_round_trip() -> Result<()> {
    let inputs = [
        "",
        "plain words only",
        "Hi! Let's talk about C++, F# and .NET (or Node.js?) at 9:30am.\r\n",
        "see https://example.com/a/b?x=1&y=2#frag, or mail first.last+@example.com!",
        "tabs\tand\r\nnewlines\n\n  trailing spaces  ",
        "“Smart quotes” — en–dash… and emoji 🎉 and 日本語のテキスト",
        "...leading dots, trailing dots...",
        "'quoted' \"double\" (paren) [bracket] {brace}",
    ];

    for input in inputs {
        let output = TechProseTokenizer::new().tokenize_str(input).into_text()?;
        assert_eq!(output, input);
    }
    Ok(())
}

#[test]
fn test_leading_dot() -> Result<()> {
    assert_eq!(texts(".net")?, vec![".net"]);
    assert_eq!(texts("Go.")?, vec!["Go", "."]);
    assert_eq!(texts("use .net.")?, vec!["use", " ", ".net", "."]);
    Ok(())
}

#[test]
fn test_trailing_symbols() -> Result<()> {
    assert_eq!(texts("C++")?, vec!["C++"]);
    assert_eq!(texts("F#")?, vec!["F#"]);

    let lone = tokens("+")?;
    assert_eq!(lone.len(), 1);
    assert_eq!(lone[0].text(), "+");
    assert!(lone[0].is_punct());
    Ok(())
}

#[test]
fn test_sentence() -> Result<()> {
    let tokens = tokens("I can't wait, O'Brien's TCP/IP stack works.")?;
    let words: Vec<&str> = tokens
        .iter()
        .filter(|t| t.is_word())
        .map(Token::text)
        .collect();
    assert_eq!(
        words,
        vec!["I", "can't", "wait", "O'Brien's", "TCP/IP", "stack", "works"]
    );

    let punct: Vec<&str> = tokens
        .iter()
        .filter(|t| t.is_punct())
        .map(Token::text)
        .collect();
    assert_eq!(punct, vec![",", "."]);
    Ok(())
}

#[test]
fn test_crlf() -> Result<()> {
    let tokens = tokens("a\r\nb")?;
    assert_eq!(tokens.len(), 4);
    assert!(tokens[1].is_punct() && tokens[1].is_space());
    assert!(tokens[2].is_punct() && tokens[2].is_space());
    Ok(())
}

#[test]
fn test_word_tokens_never_carry_flags() -> Result<()> {
    for token in tokens("wishy-washy first_last #tag @me 3.14 50% a*b x\\y")? {
        if token.is_word() {
            assert!(!token.is_punct());
            assert!(!token.is_space());
        }
        assert!(!token.is_lemma());
    }
    Ok(())
}

#[test]
fn test_reader_with_tiny_buffer() -> Result<()> {
    let text = "Read “this” slowly: naïve → café, 3.5 ms.\n".repeat(20);
    let reader: Box<dyn BufRead> = Box::new(BufReader::with_capacity(3, text.as_bytes()));
    let output = TechProseTokenizer::new().tokenize(reader).into_text()?;
    assert_eq!(output, text);
    Ok(())
}

#[test]
fn test_invalid_utf8_is_an_error() {
    let bytes: &[u8] = b"ok \xff\xfe";
    let mut stream = TechProseTokenizer::new().tokenize(Box::new(bytes));

    assert_eq!(stream.next().unwrap().unwrap().text(), "ok");
    assert_eq!(stream.next().unwrap().unwrap().text(), " ");
    assert!(stream.next().unwrap().is_err());
    assert!(stream.next().is_none());
}

struct BrokenPipe;

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }
}

#[test]
fn test_read_error_reported_once() {
    let reader = Box::new(BufReader::new(BrokenPipe));
    let results: Vec<_> = TechProseTokenizer::new().tokenize(reader).collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

#[test]
fn test_whitespace_tokenizer_round_trip() -> Result<()> {
    let text = "keep, punctuation!  inside\twords\n";
    let tokens: Vec<Token> = WhitespaceTokenizer::new().tokenize_str(text).collect::<Result<_>>()?;
    let words: Vec<&str> = tokens.iter().filter(|t| t.is_word()).map(Token::text).collect();
    assert_eq!(words, vec!["keep,", "punctuation!", "inside", "words"]);
    assert_eq!(tokens.iter().map(Token::text).collect::<String>(), text);
    Ok(())
}
