//! Code point classification for technical prose.
//!
//! Unicode punctuation terminates words, with a few exceptions that are
//! common inside technical terms (`#hashtag`, `@handle`, `TCP/IP`,
//! `first_last`, ...). Those are treated as word characters, as are
//! Unicode symbols (`C++`, `$5`).

use unicode_general_category::{GeneralCategory, get_general_category};

/// Punctuation treated as word-constituent.
pub const WORD_PUNCT: [char; 8] = ['-', '#', '@', '*', '%', '_', '/', '\\'];

/// Separators that may begin a word when followed by a word character (`.net`).
pub const LEADING_EXCEPTIONS: [char; 1] = ['.'];

/// Separators that may appear inside a word when followed by a word character
/// (`Node.js`, `O'Brien`, `AT&T`).
pub const MID_EXCEPTIONS: [char; 6] = ['.', '\'', '\u{2019}', ':', '?', '&'];

/// Whether `c` belongs to one of the Unicode punctuation categories (P*).
pub fn is_unicode_punct(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Whether `c` belongs to one of the Unicode symbol categories (S*).
pub fn is_unicode_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Punctuation that terminates a word.
pub fn is_punct(c: char) -> bool {
    is_unicode_punct(c) && !WORD_PUNCT.contains(&c)
}

/// A code point that ends a word: white space or terminating punctuation.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || is_punct(c)
}

/// Terminator test used for lookahead; end of input counts as a terminator.
pub fn is_terminator(c: Option<char>) -> bool {
    c.is_none_or(is_separator)
}

pub fn is_leading_exception(c: char) -> bool {
    LEADING_EXCEPTIONS.contains(&c)
}

pub fn is_mid_exception(c: char) -> bool {
    MID_EXCEPTIONS.contains(&c)
}
