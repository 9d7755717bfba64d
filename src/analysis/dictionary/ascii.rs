//! Folding of Unicode text to ASCII equivalents.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::dictionary::Dictionary;

/// Letters and punctuation with no compatibility decomposition to ASCII.
const FOLDS: &[(char, &str)] = &[
    ('æ', "ae"),
    ('Æ', "AE"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('ø', "o"),
    ('Ø', "O"),
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('đ', "d"),
    ('Đ', "D"),
    ('ð', "d"),
    ('Ð', "D"),
    ('ł', "l"),
    ('Ł', "L"),
    ('þ', "th"),
    ('Þ', "TH"),
    ('ı', "i"),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{2013}', "-"),
    ('\u{2014}', "-"),
];

/// Fold `text` to ASCII where an equivalent exists.
///
/// Characters are decomposed (NFKD), combining marks are dropped and a small
/// table covers letters without a decomposition. Characters with no ASCII
/// equivalent are kept.
pub fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.nfkd() {
        if c.is_ascii() {
            folded.push(c);
        } else if is_combining_mark(c) {
            continue;
        } else if let Some(&(_, ascii)) = FOLDS.iter().find(|&&(from, _)| from == c) {
            folded.push_str(ascii);
        } else {
            folded.push(c);
        }
    }
    folded
}

/// A dictionary that folds words to ASCII: "café" → "cafe", "Ærø" → "AEro".
///
/// Words that are already ASCII, or that have no ASCII equivalent, are not found.
///
/// # Examples
///
/// ```
/// use jargon::analysis::dictionary::{AsciiFold, Dictionary};
///
/// assert_eq!(AsciiFold.lookup(&["naïve"]).as_deref(), Some("naive"));
/// assert_eq!(AsciiFold.lookup(&["naive"]), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiFold;

impl Dictionary for AsciiFold {
    fn lookup(&self, grams: &[&str]) -> Option<String> {
        let [gram] = grams else {
            return None;
        };
        if gram.is_ascii() {
            return None;
        }
        let folded = fold(gram);
        (folded != *gram).then_some(folded)
    }

    fn max_gram_length(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "ascii_fold"
    }
}
