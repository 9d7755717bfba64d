//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::JargonArgs;
use crate::error::Result;

/// A token as printed by `tokenize --format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub text: String,
    pub punct: bool,
    pub space: bool,
    pub lemma: bool,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        TokenRecord {
            text: token.text().to_string(),
            punct: token.is_punct(),
            space: token.is_space(),
            lemma: token.is_lemma(),
        }
    }
}

/// Result structure for `lemmatize --format json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LemmatizeResult {
    pub text: String,
    pub lemmas: Vec<String>,
    pub filters: Vec<String>,
}

/// Format a token for human-readable output: its quoted text followed by
/// its kind.
pub fn format_token_human(token: &Token) -> String {
    let mut line = format!("{:?}", token.text());
    let mut kinds = Vec::with_capacity(3);
    if token.is_word() {
        kinds.push("word");
    }
    if token.is_punct() {
        kinds.push("punct");
    }
    if token.is_space() {
        kinds.push("space");
    }
    if token.is_lemma() {
        kinds.push("lemma");
    }
    line.push('\t');
    line.push_str(&kinds.join(" "));
    line
}

/// Output a serializable value as JSON, honoring `--pretty`.
pub fn output_json<T: Serialize, W: Write>(
    result: &T,
    args: &JargonArgs,
    writer: &mut W,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *writer, result)?;
    } else {
        serde_json::to_writer(&mut *writer, result)?;
    }
    writeln!(writer)?;
    Ok(())
}
