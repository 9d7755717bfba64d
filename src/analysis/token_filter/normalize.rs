//! Unicode normalization filter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::{
    IsNormalized, UnicodeNormalization, is_nfc_quick, is_nfd_quick, is_nfkc_quick, is_nfkd_quick,
};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::{JargonError, Result};

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

impl NormalizationForm {
    /// Normalize `text` to this form.
    pub fn normalize(self, text: &str) -> String {
        match self {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::NFD => text.nfd().collect(),
            NormalizationForm::NFKC => text.nfkc().collect(),
            NormalizationForm::NFKD => text.nfkd().collect(),
        }
    }

    fn is_normalized(self, text: &str) -> bool {
        let quick = match self {
            NormalizationForm::NFC => is_nfc_quick(text.chars()),
            NormalizationForm::NFD => is_nfd_quick(text.chars()),
            NormalizationForm::NFKC => is_nfkc_quick(text.chars()),
            NormalizationForm::NFKD => is_nfkd_quick(text.chars()),
        };
        match quick {
            IsNormalized::Yes => true,
            IsNormalized::No => false,
            IsNormalized::Maybe => self.normalize(text) == text,
        }
    }
}

impl FromStr for NormalizationForm {
    type Err = JargonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NFC" => Ok(NormalizationForm::NFC),
            "NFD" => Ok(NormalizationForm::NFD),
            "NFKC" => Ok(NormalizationForm::NFKC),
            "NFKD" => Ok(NormalizationForm::NFKD),
            _ => Err(JargonError::invalid_argument(format!(
                "unknown normalization form: {s}"
            ))),
        }
    }
}

/// A filter that applies Unicode normalization to each token.
///
/// Tokens already in the requested form pass through untouched; others are
/// re-emitted as lemmas.
#[derive(Clone, Debug)]
pub struct NormalizeFilter {
    form: NormalizationForm,
}

impl NormalizeFilter {
    pub fn new(form: NormalizationForm) -> Self {
        NormalizeFilter { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl Filter for NormalizeFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        let form = self.form;
        Ok(Box::new(tokens.map(move |token| {
            let token = token?;
            if form.is_normalized(token.text()) {
                Ok(token)
            } else {
                Ok(token.relemma(form.normalize(token.text())))
            }
        })))
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, Token};

    fn run(form: NormalizationForm, tokens: Vec<Token>) -> Vec<Token> {
        NormalizeFilter::new(form)
            .filter(tokens.into_token_stream())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_nfc_normalization() {
        // "Amélie" with a decomposed 'é' (U+0065 U+0301)
        let result = run(
            NormalizationForm::NFC,
            vec![Token::word("Am\u{0065}\u{0301}lie"), Token::word("Amélie")],
        );
        assert_eq!(result[0].text(), "Am\u{00e9}lie");
        assert!(result[0].is_lemma());
        assert!(!result[1].is_lemma());
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth "Ａ" to halfwidth "A"
        let result = run(NormalizationForm::NFKC, vec![Token::word("\u{ff21}")]);
        assert_eq!(result[0].text(), "A");
    }

    #[test]
    fn test_nfd_normalization() {
        let result = run(NormalizationForm::NFD, vec![Token::word("é")]);
        assert_eq!(result[0].text(), "e\u{0301}");
    }

    #[test]
    fn test_form_from_str() {
        assert_eq!("nfkc".parse::<NormalizationForm>().unwrap(), NormalizationForm::NFKC);
        assert!("nfx".parse::<NormalizationForm>().is_err());
    }
}
