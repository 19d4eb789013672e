use crate::error::{MbzError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MailboxZeroConfig {
    pub similarity: SimilarityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// User-facing threshold, 0-100. Parsed wide so any out-of-range value
    /// reaches `validate`.
    pub default_similarity: i64,
    pub weights: ScoreWeights,
    pub common_word_bonus: f64,
    pub min_word_len: usize,
    pub min_common_words: usize,
}

/// Per-field weights of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub subject: f64,
    pub sender: f64,
    pub body: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            subject: 0.4,
            sender: 0.4,
            body: 0.2,
        }
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            default_similarity: 75,
            weights: ScoreWeights::default(),
            common_word_bonus: 0.1,
            min_word_len: 3,
            min_common_words: 2,
        }
    }
}

impl SimilarityConfig {
    /// Default threshold on the engine's 0-1 scale.
    pub fn default_threshold(&self) -> f64 {
        self.default_similarity as f64 / 100.0
    }
}

impl MailboxZeroConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.similarity;
        if !(0..=100).contains(&sim.default_similarity) {
            return Err(MbzError::InvalidConfig(format!(
                "default similarity must be between 0 and 100, got {}",
                sim.default_similarity
            )));
        }

        let w = &sim.weights;
        for (name, value) in [("subject", w.subject), ("sender", w.sender), ("body", w.body)] {
            if !value.is_finite() || value < 0.0 {
                return Err(MbzError::InvalidConfig(format!(
                    "weight `{name}` must be a non-negative number, got {value}"
                )));
            }
        }
        let weight_sum = w.subject + w.sender + w.body;
        if weight_sum > 1.0 + WEIGHT_SUM_TOLERANCE {
            return Err(MbzError::InvalidConfig(format!(
                "weights must sum to at most 1.0, got {weight_sum}"
            )));
        }

        if !sim.common_word_bonus.is_finite() || sim.common_word_bonus < 0.0 {
            return Err(MbzError::InvalidConfig(format!(
                "common word bonus must be a non-negative number, got {}",
                sim.common_word_bonus
            )));
        }
        if sim.min_common_words == 0 {
            return Err(MbzError::InvalidConfig(
                "min_common_words must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
