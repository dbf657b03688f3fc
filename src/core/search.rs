//! Search term normalization
//!
//! Search matching compares strings after folding away diacritics,
//! lowercasing and trimming, so `" MÉDIA "` finds `"media library"`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove diacritical marks
///
/// Letters are decomposed canonically and their combining marks dropped.
/// Latin letters that have no decomposition (ligatures, stroked letters)
/// are spelled out with plain letters.
pub fn deburr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_letter(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

fn fold_letter(c: char) -> Option<&'static str> {
    let folded = match c {
        'Æ' => "Ae",
        'æ' => "ae",
        'Ø' => "O",
        'ø' => "o",
        'Œ' => "Oe",
        'œ' => "oe",
        'ß' => "ss",
        'Ð' | 'Đ' => "D",
        'ð' | 'đ' => "d",
        'Þ' => "Th",
        'þ' => "th",
        'Ł' | 'Ŀ' => "L",
        'ł' | 'ŀ' => "l",
        'Ħ' => "H",
        'ħ' => "h",
        'ı' => "i",
        'Ĳ' => "IJ",
        'ĳ' => "ij",
        'Ŋ' => "N",
        'ŋ' => "n",
        'Ŧ' => "T",
        'ŧ' => "t",
        'ſ' => "s",
        'ŉ' => "'n",
        _ => return None,
    };
    Some(folded)
}

/// Normalize a string for search comparison
pub fn normalize(input: &str) -> String {
    deburr(input).to_lowercase().trim().to_string()
}

/// A search term normalized once and matched against many candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        SearchTerm(normalize(term))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the term is a substring of the normalized candidate
    pub fn matches(&self, candidate: &str) -> bool {
        normalize(candidate).contains(self.0.as_str())
    }
}
