//! Mailbox Zero similarity engine: near-duplicate detection for inbox triage.
//!
//! Pieces:
//! 1. Normalization (lower-case, punctuation to spaces)
//! 2. Scorer: char-level Levenshtein ratio, weighted subject/sender/body similarity
//! 3. Clusterer: largest anchored group, or matches of one target
//! 4. Finder: percentage-based request handling with target lookup

pub mod cluster;
pub mod finder;
pub mod normalize;
pub mod scorer;

pub use cluster::{group_similar, largest_group, matches_of, Clusterer, EmailGroup};
pub use finder::{find_similar, SimilarRequest, SimilarityFinder};
pub use scorer::{body_excerpt, score, string_similarity, Scorer};
