//! Canonicalization of numbers written as words or formatted digits.

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::analysis::dictionary::Dictionary;

const ONES: [(&str, i64); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const TEENS: [(&str, i64); 10] = [
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: [(&str, i64); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const MAGNITUDES: [(&str, i64); 7] = [
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
    ("quadrillion", 1_000_000_000_000_000),
    ("quintillion", 1_000_000_000_000_000_000),
];

/// Number words from "one" to "ninety-nine", hyphens removed ("thirtyfive").
static NUMBER_WORDS: LazyLock<AHashMap<String, i64>> = LazyLock::new(|| {
    let mut words: AHashMap<String, i64> = ONES
        .iter()
        .chain(TEENS.iter())
        .chain(TENS.iter())
        .map(|&(word, value)| (word.to_string(), value))
        .collect();

    for &(tens, tens_value) in &TENS {
        for &(ones, ones_value) in &ONES {
            words.insert(format!("{tens}{ones}"), tens_value + ones_value);
        }
    }
    words
});

#[derive(Clone, Copy, Debug)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn times(self, magnitude: i64) -> Option<Number> {
        match self {
            Number::Int(i) => i.checked_mul(magnitude).map(Number::Int),
            Number::Float(f) => Some(Number::Float(f * magnitude as f64)).filter(|n| n.is_finite()),
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    fn to_canonical(self) -> String {
        match self {
            Number::Int(i) => i.to_string(),
            Number::Float(f) => f.to_string(),
        }
    }
}

/// Remove grouping commas and hyphens; a leading minus sign is kept.
fn normalize(gram: &str) -> String {
    let stripped: String = gram.chars().filter(|&c| c != ',' && c != '-').collect();
    if gram.starts_with('-') {
        format!("-{stripped}")
    } else {
        stripped
    }
}

/// Integers like zip codes, serial numbers and phone numbers are written with
/// leading zeros on purpose.
fn has_leading_zero(s: &str) -> bool {
    s.starts_with('0') || s.starts_with("+0") || s.starts_with("-0")
}

fn parse_leading(gram: &str) -> Option<Number> {
    let s = normalize(gram);
    if s.is_empty() {
        return None;
    }

    if let Ok(i) = s.parse::<i64>() {
        return (!has_leading_zero(&s)).then_some(Number::Int(i));
    }

    let numeric = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'));
    if numeric && s.bytes().any(|b| b.is_ascii_digit()) {
        return s
            .parse::<f64>()
            .ok()
            .map(Number::Float)
            .filter(Number::is_finite);
    }

    NUMBER_WORDS.get(&s.to_lowercase()).map(|&i| Number::Int(i))
}

fn magnitude(gram: &str) -> Option<i64> {
    let gram = gram.to_lowercase();
    MAGNITUDES
        .iter()
        .find(|&&(word, _)| word == gram)
        .map(|&(_, value)| value)
}

/// Converts numbers to digits: "three" → "3", "thirty-five thousand" →
/// "35000", "2.5 million" → "2500000", "1,000,000" → "1000000".
///
/// A match is exactly one leading number (integer, decimal or number word)
/// followed by zero or more magnitudes ("hundred" … "quintillion"), all
/// multiplied together. Every word must contribute. Additive phrases like
/// "one thousand five hundred" are not supported.
///
/// Integers with a leading zero are left alone. A single word that is already
/// in canonical form is not a match.
///
/// # Examples
///
/// ```
/// use jargon::analysis::dictionary::{Dictionary, Numbers};
///
/// assert_eq!(Numbers.lookup(&["three", "hundred"]).as_deref(), Some("300"));
/// assert_eq!(Numbers.lookup(&["02134"]), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Numbers;

impl Dictionary for Numbers {
    fn lookup(&self, grams: &[&str]) -> Option<String> {
        let (first, rest) = grams.split_first()?;
        let mut number = parse_leading(first)?;
        for gram in rest {
            number = number.times(magnitude(gram)?)?;
        }

        let canonical = number.to_canonical();
        (!rest.is_empty() || canonical != *first).then_some(canonical)
    }

    fn max_gram_length(&self) -> usize {
        3
    }

    fn name(&self) -> &'static str {
        "numbers"
    }
}
