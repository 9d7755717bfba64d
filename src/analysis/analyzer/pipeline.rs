//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! This is the main building block for lemmatization. Filters are applied
//! in the order they were added, each one consuming the stream produced by
//! the previous one.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use jargon::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use jargon::analysis::dictionary::{Contractions, tech_tags};
//! use jargon::analysis::token::TokenStreamExt;
//! use jargon::analysis::token_filter::NgramFilter;
//! use jargon::analysis::tokenizer::TechProseTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(TechProseTokenizer::new()))
//!     .add_filter(Arc::new(NgramFilter::new(tech_tags())))
//!     .add_filter(Arc::new(NgramFilter::new(Contractions)))
//!     .with_name("tech");
//!
//! let text = analyzer.analyze_str("I can't use Ruby on Rails").unwrap().into_text().unwrap();
//! assert_eq!(text, "I can not use ruby-on-rails");
//! ```

use std::fmt;
use std::io::BufRead;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::{TokenStream, TokenStreamExt};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the configured name of this analyzer.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>> {
        debug!(
            "{}: {} with {} filter(s)",
            self.name,
            self.tokenizer.name(),
            self.filters.len()
        );
        self.tokenizer.tokenize(reader).apply(&self.filters)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
