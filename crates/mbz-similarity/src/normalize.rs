//! Text normalization and tokenization shared by every field comparison.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}\s]").unwrap());

/// Lower-case, turn every char that is not a letter, digit or whitespace into
/// a single space, then trim. Inner whitespace runs are left as they are.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    RE_NON_WORD.replace_all(&lowered, " ").trim().to_string()
}

/// Distinct whitespace-separated tokens with at least `min_len` chars.
pub fn significant_words(text: &str, min_len: usize) -> HashSet<&str> {
    text.split_whitespace()
        .filter(|w| w.chars().count() >= min_len)
        .collect()
}

/// Number of distinct significant words the two strings share.
pub fn common_word_count(a: &str, b: &str, min_len: usize) -> usize {
    let wa = significant_words(a, min_len);
    if wa.is_empty() {
        return 0;
    }
    let wb = significant_words(b, min_len);
    wa.intersection(&wb).count()
}
