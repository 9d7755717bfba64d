//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals, -ed/-ing suffixes and a final -y
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! Each rule applies only when the remaining stem is long enough, measured
//! in vowel-consonant sequences.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::dictionary::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("ponies"), "poni");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::analysis::dictionary::stem::Stemmer;

const STEP2: [(&str, &str); 20] = [
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3: [(&str, &str); 7] = [
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4: [&str; 19] = [
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// The Porter stemmer for English.
///
/// Only ASCII alphabetic words longer than two letters are stemmed; stems are
/// lower case. Anything else is returned unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return word.to_string();
        }

        let mut w = word.to_ascii_lowercase().into_bytes();
        step1a(&mut w);
        step1b(&mut w);
        step1c(&mut w);
        step2(&mut w);
        step3(&mut w);
        step4(&mut w);
        step5(&mut w);

        // Only ASCII letters were ever written.
        String::from_utf8_lossy(&w).into_owned()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences in `w`.
fn measure(w: &[u8]) -> usize {
    let n = w.len();
    let mut i = 0;
    while i < n && is_consonant(w, i) {
        i += 1;
    }

    let mut m = 0;
    loop {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i == n {
            return m;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
        if i == n {
            return m;
        }
    }
}

fn has_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// Consonant-vowel-consonant ending, where the last consonant is not w, x or y.
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

fn stem_len(w: &[u8], suffix: &str) -> Option<usize> {
    w.ends_with(suffix.as_bytes()).then(|| w.len() - suffix.len())
}

fn replace(w: &mut Vec<u8>, at: usize, replacement: &str) {
    w.truncate(at);
    w.extend_from_slice(replacement.as_bytes());
}

fn step1a(w: &mut Vec<u8>) {
    if let Some(at) = stem_len(w, "sses") {
        replace(w, at, "ss");
    } else if let Some(at) = stem_len(w, "ies") {
        replace(w, at, "i");
    } else if w.ends_with(b"ss") {
        // unchanged
    } else if w.ends_with(b"s") {
        w.pop();
    }
}

fn step1b(w: &mut Vec<u8>) {
    if let Some(at) = stem_len(w, "eed") {
        if measure(&w[..at]) > 0 {
            w.pop();
        }
        return;
    }

    let removed = ["ed", "ing"]
        .iter()
        .find_map(|suffix| stem_len(w, suffix).filter(|&at| has_vowel(&w[..at])));
    let Some(at) = removed else {
        return;
    };
    w.truncate(at);

    if w.ends_with(b"at") || w.ends_with(b"bl") || w.ends_with(b"iz") {
        w.push(b'e');
    } else if ends_double_consonant(w) && !matches!(w.last(), Some(b'l' | b's' | b'z')) {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push(b'e');
    }
}

fn step1c(w: &mut [u8]) {
    let n = w.len();
    if n > 1 && w[n - 1] == b'y' && has_vowel(&w[..n - 1]) {
        w[n - 1] = b'i';
    }
}

/// Replace the first matching suffix when the stem before it has a measure
/// above `min_measure`.
fn replace_suffix(w: &mut Vec<u8>, rules: &[(&str, &str)], min_measure: usize) {
    if let Some((at, replacement)) = rules
        .iter()
        .find_map(|&(suffix, replacement)| stem_len(w, suffix).map(|at| (at, replacement)))
        && measure(&w[..at]) > min_measure
    {
        replace(w, at, replacement);
    }
}

fn step2(w: &mut Vec<u8>) {
    replace_suffix(w, &STEP2, 0);
}

fn step3(w: &mut Vec<u8>) {
    replace_suffix(w, &STEP3, 0);
}

fn step4(w: &mut Vec<u8>) {
    let Some((at, suffix)) = STEP4
        .iter()
        .find_map(|&suffix| stem_len(w, suffix).map(|at| (at, suffix)))
    else {
        return;
    };

    let stem = &w[..at];
    if measure(stem) > 1 && (suffix != "ion" || matches!(stem.last(), Some(b's' | b't'))) {
        w.truncate(at);
    }
}

fn step5(w: &mut Vec<u8>) {
    if let Some(at) = stem_len(w, "e") {
        let m = measure(&w[..at]);
        if m > 1 || (m == 1 && !ends_cvc(&w[..at])) {
            w.truncate(at);
        }
    }

    if measure(w) > 1 && ends_double_consonant(w) && w.ends_with(b"l") {
        w.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();
        let cases = [
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("cats", "cat"),
            ("feed", "feed"),
            ("agreed", "agre"),
            ("plastered", "plaster"),
            ("motoring", "motor"),
            ("sing", "sing"),
            ("hopping", "hop"),
            ("filing", "file"),
            ("happy", "happi"),
            ("relational", "relat"),
            ("conditional", "condit"),
            ("rational", "ration"),
            ("generalization", "gener"),
            ("connection", "connect"),
            ("allowance", "allow"),
            ("controll", "control"),
        ];
        for (word, stem) in cases {
            assert_eq!(stemmer.stem(word), stem, "{word}");
        }
    }

    #[test]
    fn test_unstemmable_words() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("C++"), "C++");
        assert_eq!(stemmer.stem("naïve"), "naïve");
        assert_eq!(stemmer.stem("node.js"), "node.js");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(PorterStemmer::new().stem("Running"), "run");
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure(b"tree"), 0);
        assert_eq!(measure(b"trees"), 1);
        assert_eq!(measure(b"trouble"), 1);
        assert_eq!(measure(b"troubles"), 2);
        assert_eq!(measure(b"oaten"), 2);
    }

    #[test]
    fn test_consonants() {
        let word = b"toy";
        assert!(is_consonant(word, 0));
        assert!(!is_consonant(word, 1));
        assert!(is_consonant(word, 2));
        assert!(!is_consonant(b"syzygy", 1));
    }
}
