//! Command line argument parsing for the Jargon CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Jargon - a lossless tokenizer and lemmatizer for technical prose
#[derive(Parser, Debug, Clone)]
#[command(name = "jargon")]
#[command(about = "A lossless tokenizer and lemmatizer for technical prose")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JargonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl JargonArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replace recognized words and phrases with their canonical forms
    Lemmatize(LemmatizeArgs),

    /// Print the tokens of the input, one per line
    Tokenize(TokenizeArgs),
}

/// Where to read text from. Standard input is used when neither is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read text from a file
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "string")]
    pub file: Option<PathBuf>,

    /// Read text from the given string
    #[arg(short = 's', long = "string", value_name = "STRING")]
    pub string: Option<String>,
}

/// Arguments for lemmatization
#[derive(Parser, Debug, Clone)]
pub struct LemmatizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Filters to apply, in order (repeatable)
    #[arg(long = "filter", value_name = "FILTER")]
    pub filters: Vec<FilterKind>,

    /// JSON synonyms file, applied after every --filter
    #[arg(long, value_name = "FILE")]
    pub synonyms: Option<PathBuf>,
}

impl LemmatizeArgs {
    /// Whether any transformation was requested.
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty() || self.synonyms.is_some()
    }
}

/// Arguments for tokenization
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only print words, skipping punctuation and spaces
    #[arg(long)]
    pub words_only: bool,

    /// Split on white space only instead of tech-aware tokenization
    #[arg(long)]
    pub whitespace: bool,
}

/// Built-in filters available to `lemmatize`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Technology tags ("Node JS" → "node.js")
    Tags,
    /// English contractions ("don't" → "do not")
    Contractions,
    /// Spelled-out numbers ("three hundred" → "300")
    Numbers,
    /// Remove English stop words
    Stopwords,
    /// Porter stemming
    Stem,
    /// Fold accented characters to ASCII
    Fold,
    /// Lowercase every token
    Lowercase,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_lemmatize_command() {
        let args = JargonArgs::try_parse_from([
            "jargon",
            "lemmatize",
            "-s",
            "Node JS",
            "--filter",
            "tags",
            "--filter",
            "contractions",
            "--synonyms",
            "synonyms.json",
        ])
        .unwrap();

        if let Command::Lemmatize(lemmatize_args) = args.command {
            assert_eq!(lemmatize_args.input.string.as_deref(), Some("Node JS"));
            assert_eq!(
                lemmatize_args.filters,
                vec![FilterKind::Tags, FilterKind::Contractions]
            );
            assert_eq!(
                lemmatize_args.synonyms,
                Some(PathBuf::from("synonyms.json"))
            );
            assert!(lemmatize_args.has_filters());
        } else {
            panic!("Expected Lemmatize command");
        }
    }

    #[test]
    fn test_tokenize_command() {
        let args = JargonArgs::try_parse_from([
            "jargon",
            "tokenize",
            "-f",
            "input.txt",
            "--words-only",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        if let Command::Tokenize(tokenize_args) = args.command {
            assert_eq!(tokenize_args.input.file, Some(PathBuf::from("input.txt")));
            assert!(tokenize_args.words_only);
            assert!(!tokenize_args.whitespace);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_file_and_string_conflict() {
        let result =
            JargonArgs::try_parse_from(["jargon", "tokenize", "-f", "a.txt", "-s", "text"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_filter() {
        let result = JargonArgs::try_parse_from(["jargon", "lemmatize", "--filter", "soundex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = JargonArgs::try_parse_from(["jargon", "-vv", "tokenize"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = JargonArgs::try_parse_from(["jargon", "tokenize"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = JargonArgs::try_parse_from(["jargon", "-q", "-vvv", "tokenize"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
