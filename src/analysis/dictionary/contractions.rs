//! Expansion of English contractions.

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::analysis::dictionary::Dictionary;

const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("she'll", "she will"),
    ("he'll", "he will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("i'm", "i am"),
    ("you're", "you are"),
    ("she's", "she is"),
    ("he's", "he is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("i'd", "i would"),
    ("you'd", "you would"),
    ("she'd", "she would"),
    ("he'd", "he would"),
    ("we'd", "we would"),
    ("they'd", "they would"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("haven't", "have not"),
    ("hadn't", "had not"),
    ("can't", "can not"),
    ("won't", "will not"),
    ("will've", "will have"),
    ("wouldn't", "would not"),
    ("would've", "would have"),
    ("couldn't", "could not"),
    ("could've", "could have"),
    ("shouldn't", "should not"),
    ("should've", "should have"),
    ("mightn't", "might not"),
    ("might've", "might have"),
    ("mustn't", "must not"),
    ("must've", "must have"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("wanna", "want to"),
    ("gimme", "give me"),
    ("cannot", "can not"),
];

/// Every accepted spelling: lower, Title and UPPER case, with either an ASCII
/// apostrophe or a right single quotation mark.
static VARIATIONS: LazyLock<AHashMap<String, String>> = LazyLock::new(|| {
    let cases: [fn(&str) -> String; 3] = [str::to_lowercase, title, str::to_uppercase];
    let mut variations = AHashMap::new();

    for &(contraction, expansion) in CONTRACTIONS {
        for spelling in [contraction.to_string(), contraction.replace('\'', "\u{2019}")] {
            for case in cases {
                variations.insert(case(&spelling), case(expansion));
            }
        }
    }
    variations
});

fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Expands single-word contractions, such as "don't" → "do not" and
/// "We’ve" → "We have".
///
/// Lower case, Title case and UPPER case spellings are recognized, and the
/// expansion follows the same casing.
///
/// # Examples
///
/// ```
/// use jargon::analysis::dictionary::{Contractions, Dictionary};
///
/// assert_eq!(Contractions.lookup(&["Don't"]).as_deref(), Some("Do not"));
/// assert_eq!(Contractions.lookup(&["SHE'S"]).as_deref(), Some("SHE IS"));
/// assert_eq!(Contractions.lookup(&["dOn't"]), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Contractions;

impl Dictionary for Contractions {
    fn lookup(&self, grams: &[&str]) -> Option<String> {
        match grams {
            [gram] => VARIATIONS.get(*gram).cloned(),
            _ => None,
        }
    }

    fn max_gram_length(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "contractions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansions() {
        let cases = [
            ("don't", "do not"),
            ("Don’t", "Do not"),
            ("I'm", "I am"),
            ("i'm", "i am"),
            ("WON'T", "WILL NOT"),
            ("We’ve", "We have"),
            ("cannot", "can not"),
            ("Gonna", "Going to"),
        ];
        for (input, expected) in cases {
            assert_eq!(Contractions.lookup(&[input]).as_deref(), Some(expected), "{input}");
        }
    }

    #[test]
    fn test_not_contractions() {
        assert_eq!(Contractions.lookup(&["dont"]), None);
        assert_eq!(Contractions.lookup(&["O'Brien"]), None);
        assert_eq!(Contractions.lookup(&["don't", "do"]), None);
        assert_eq!(Contractions.lookup(&[]), None);
    }

    #[test]
    fn test_variation_count() {
        assert!(VARIATIONS.len() >= CONTRACTIONS.len() * 3);
    }
}
