//! Command implementations for the Jargon CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;

use log::info;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::dictionary::{
    AsciiFold, Contractions, Numbers, StopWords, Stems, SynonymsDictionary, tech_tags,
};
use crate::analysis::token::{Token, TokenStreamExt};
use crate::analysis::token_filter::{Filter, LowercaseFilter, NgramFilter};
use crate::analysis::tokenizer::{TechProseTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command, writing its output to standard output.
pub fn execute_command(args: JargonArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_command(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, writing its output to `out`.
pub fn run_command<W: Write>(args: &JargonArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Lemmatize(lemmatize_args) => lemmatize(lemmatize_args, args, out),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, args, out),
    }
}

/// Open the input named by `input`: a file, a literal string, or stdin.
fn open_input(input: &InputArgs) -> Result<Box<dyn BufRead + '_>> {
    if let Some(path) = &input.file {
        info!("Reading from: {}", path.display());
        Ok(Box::new(BufReader::new(File::open(path)?)))
    } else if let Some(text) = &input.string {
        Ok(Box::new(text.as_bytes()))
    } else {
        info!("Reading from standard input");
        Ok(Box::new(io::stdin().lock()))
    }
}

/// Build the filter chain for `lemmatize`, in command line order.
pub fn build_filters(args: &LemmatizeArgs) -> Result<Vec<Arc<dyn Filter>>> {
    let mut filters: Vec<Arc<dyn Filter>> = args
        .filters
        .iter()
        .map(|kind| -> Arc<dyn Filter> {
            match kind {
                FilterKind::Tags => Arc::new(NgramFilter::new(tech_tags())),
                FilterKind::Contractions => Arc::new(NgramFilter::new(Contractions)),
                FilterKind::Numbers => Arc::new(NgramFilter::new(Numbers)),
                FilterKind::Stopwords => Arc::new(NgramFilter::new(StopWords::english())),
                FilterKind::Stem => Arc::new(NgramFilter::new(Stems::english())),
                FilterKind::Fold => Arc::new(NgramFilter::new(AsciiFold)),
                FilterKind::Lowercase => Arc::new(LowercaseFilter::new()),
            }
        })
        .collect();

    if let Some(path) = &args.synonyms {
        info!("Loading synonyms from: {}", path.display());
        filters.push(Arc::new(NgramFilter::new(
            SynonymsDictionary::load_from_file(path)?,
        )));
    }

    Ok(filters)
}

/// Lemmatize the input.
fn lemmatize<W: Write>(args: &LemmatizeArgs, cli_args: &JargonArgs, out: &mut W) -> Result<()> {
    let filters = build_filters(args)?;
    let names: Vec<String> = filters.iter().map(|f| f.name().to_string()).collect();
    if !args.has_filters() {
        info!("No filters given, input is copied through");
    }

    let analyzer = filters.into_iter().fold(
        PipelineAnalyzer::new(Arc::new(TechProseTokenizer::new())),
        PipelineAnalyzer::add_filter,
    );
    info!("Analyzer: {analyzer:?}");

    let tokens = analyzer.analyze(open_input(&args.input)?)?;

    match cli_args.output_format {
        OutputFormat::Human => {
            let written = tokens.write_to(out)?;
            info!("Wrote {written} bytes");
        }
        OutputFormat::Json => {
            let mut text = String::new();
            let mut lemmas = Vec::new();
            for token in tokens {
                let token = token?;
                text.push_str(token.text());
                if token.is_lemma() {
                    lemmas.push(token.into_text());
                }
            }
            let result = LemmatizeResult {
                text,
                lemmas,
                filters: names,
            };
            output_json(&result, cli_args, out)?;
        }
    }
    Ok(())
}

/// Print the tokens of the input.
fn tokenize<W: Write>(args: &TokenizeArgs, cli_args: &JargonArgs, out: &mut W) -> Result<()> {
    let tokenizer: Box<dyn Tokenizer> = if args.whitespace {
        Box::new(WhitespaceTokenizer::new())
    } else {
        Box::new(TechProseTokenizer::new())
    };
    info!("Tokenizer: {}", tokenizer.name());

    let mut tokens = tokenizer.tokenize(open_input(&args.input)?);
    if args.words_only {
        tokens = tokens.words();
    }

    match cli_args.output_format {
        OutputFormat::Human => {
            for token in tokens {
                writeln!(out, "{}", format_token_human(&token?))?;
            }
        }
        OutputFormat::Json => {
            let records = tokens
                .map(|token| token.map(|t: Token| TokenRecord::from(&t)))
                .collect::<Result<Vec<_>>>()?;
            output_json(&records, cli_args, out)?;
        }
    }
    Ok(())
}
