//! Composite similarity between two emails.
//!
//! Each field is compared with a normalized edit-distance ratio plus a small
//! bonus for shared words; the three field scores are then combined with
//! fixed weights (subject and sender 0.4 each, body 0.2 by default).

use crate::normalize::{common_word_count, normalize};
use mbz_core::{Email, ScoreWeights, SimilarityConfig};
use std::borrow::Cow;

const COMMON_WORD_BONUS: f64 = 0.1;
const MIN_WORD_LEN: usize = 3;
const MIN_COMMON_WORDS: usize = 2;

/// Pairwise email scorer. `Scorer::default()` uses the stock weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    pub weights: ScoreWeights,
    pub common_word_bonus: f64,
    pub min_word_len: usize,
    pub min_common_words: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            common_word_bonus: COMMON_WORD_BONUS,
            min_word_len: MIN_WORD_LEN,
            min_common_words: MIN_COMMON_WORDS,
        }
    }
}

impl Scorer {
    /// Expects a config that passed `MailboxZeroConfig::validate`.
    pub fn from_config(config: &SimilarityConfig) -> Self {
        Self {
            weights: config.weights,
            common_word_bonus: config.common_word_bonus,
            min_word_len: config.min_word_len,
            min_common_words: config.min_common_words,
        }
    }

    /// Similarity of two raw strings in `[0, 1]`.
    pub fn string_similarity(&self, s1: &str, s2: &str) -> f64 {
        let a = normalize(s1);
        let b = normalize(s2);

        if a == b {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let distance = strsim::levenshtein(&a, &b);
        let max_len = a.chars().count().max(b.chars().count());

        let mut similarity = 1.0 - distance as f64 / max_len as f64;
        if common_word_count(&a, &b, self.min_word_len) >= self.min_common_words {
            similarity += self.common_word_bonus;
        }
        similarity.min(1.0)
    }

    /// Weighted subject/sender/body score of two emails.
    pub fn score(&self, a: &Email, b: &Email) -> f64 {
        let subject = self.string_similarity(&a.subject, &b.subject);

        let sender = match (a.primary_sender(), b.primary_sender()) {
            (Some(x), Some(y)) => self.string_similarity(&x.email, &y.email),
            _ => 0.0,
        };

        let body_a = body_excerpt(a);
        let body_b = body_excerpt(b);
        let body = if !body_a.is_empty() && !body_b.is_empty() {
            self.string_similarity(&body_a, &body_b)
        } else {
            0.0
        };

        subject * self.weights.subject + sender * self.weights.sender + body * self.weights.body
    }
}

/// Short body text used for comparison: the preview when present, otherwise
/// the first non-empty body value (normalized), otherwise empty.
pub fn body_excerpt(email: &Email) -> Cow<'_, str> {
    if !email.preview.is_empty() {
        return Cow::Borrowed(email.preview.as_str());
    }
    email
        .body_values
        .values()
        .find(|bv| !bv.value.is_empty())
        .map(|bv| Cow::Owned(normalize(&bv.value)))
        .unwrap_or(Cow::Borrowed(""))
}

/// [`Scorer::string_similarity`] with the default parameters.
pub fn string_similarity(s1: &str, s2: &str) -> f64 {
    Scorer::default().string_similarity(s1, s2)
}

/// [`Scorer::score`] with the default weights.
pub fn score(a: &Email, b: &Email) -> f64 {
    Scorer::default().score(a, b)
}
