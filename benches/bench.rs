//! Criterion benchmarks for Jargon.
//!
//! Covers tokenization on its own and lemmatization through chains of
//! n-gram filters.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use jargon::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use jargon::analysis::dictionary::{Contractions, Numbers, StopWords, Stems, tech_tags};
use jargon::analysis::token::TokenStreamExt;
use jargon::analysis::token_filter::NgramFilter;
use jargon::analysis::tokenizer::{TechProseTokenizer, Tokenizer, WhitespaceTokenizer};

/// Generate technical prose for benchmarking.
fn generate_test_text(sentences: usize) -> String {
    let templates = [
        "We don't deploy Node JS apps to k8s without a review.",
        "Ruby on Rails and ASP.NET Core both ship with an ORM.",
        "She's got twenty-five years of C++ and F# experience!",
        "Is Golang faster than Java for three hundred requests?",
        "See https://example.com/docs?lang=en&page=2 for .net examples.",
        "The quick brown fox jumps over the lazy dog, again.",
    ];

    let mut text = String::new();
    for i in 0..sentences {
        text.push_str(templates[i % templates.len()]);
        text.push(if i % 4 == 3 { '\n' } else { ' ' });
    }
    text
}

fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let text = generate_test_text(1000);
    group.throughput(Throughput::Bytes(text.len() as u64));

    let tech_prose = TechProseTokenizer::new();
    group.bench_function("tech_prose", |b| {
        b.iter(|| {
            let count = tech_prose.tokenize_str(black_box(&text)).count_tokens();
            black_box(count)
        })
    });

    let whitespace = WhitespaceTokenizer::new();
    group.bench_function("whitespace", |b| {
        b.iter(|| {
            let count = whitespace.tokenize_str(black_box(&text)).count_tokens();
            black_box(count)
        })
    });

    group.finish();
}

fn bench_lemmatization(c: &mut Criterion) {
    let mut group = c.benchmark_group("lemmatization");

    let text = generate_test_text(1000);
    group.throughput(Throughput::Bytes(text.len() as u64));

    let tokenizer = Arc::new(TechProseTokenizer::new());

    let tags = PipelineAnalyzer::new(tokenizer.clone())
        .add_filter(Arc::new(NgramFilter::new(tech_tags())));
    group.bench_function("tech_tags", |b| {
        b.iter(|| {
            let result = tags.analyze_str(black_box(&text)).and_then(|t| t.into_text());
            black_box(result)
        })
    });

    let full = PipelineAnalyzer::new(tokenizer)
        .add_filter(Arc::new(NgramFilter::new(tech_tags())))
        .add_filter(Arc::new(NgramFilter::new(Contractions)))
        .add_filter(Arc::new(NgramFilter::new(Numbers)))
        .add_filter(Arc::new(NgramFilter::new(StopWords::english())))
        .add_filter(Arc::new(NgramFilter::new(Stems::english())));
    group.bench_function("full_chain", |b| {
        b.iter(|| {
            let result = full.analyze_str(black_box(&text)).and_then(|t| t.into_text());
            black_box(result)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_lemmatization);

criterion_main!(benches);
