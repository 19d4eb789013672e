//! Request-level entry point: percentage threshold in, matching emails out.

use crate::cluster::Clusterer;
use crate::scorer::Scorer;
use mbz_core::{Email, MbzError, Result, SimilarityConfig};
use serde::{Deserialize, Serialize};

/// A "find similar" request as sent by the UI.
///
/// `similarity_threshold` is a percentage (0-100). With an `email_id` the
/// request matches against that email, otherwise it asks for the largest
/// group in the mailbox.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(default)]
    pub similarity_threshold: f64,
}

impl SimilarRequest {
    pub fn largest(similarity_threshold: f64) -> Self {
        Self {
            email_id: None,
            similarity_threshold,
        }
    }

    pub fn for_email(email_id: impl Into<String>, similarity_threshold: f64) -> Self {
        Self {
            email_id: Some(email_id.into()),
            similarity_threshold,
        }
    }

    /// Threshold on the scorer's 0-1 scale.
    pub fn threshold(&self) -> f64 {
        self.similarity_threshold / 100.0
    }

    fn target_id(&self) -> Option<&str> {
        self.email_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityFinder {
    clusterer: Clusterer,
}

impl SimilarityFinder {
    pub fn new(scorer: Scorer) -> Self {
        Self {
            clusterer: Clusterer::new(scorer),
        }
    }

    pub fn from_config(config: &SimilarityConfig) -> Self {
        Self::new(Scorer::from_config(config))
    }

    pub fn clusterer(&self) -> &Clusterer {
        &self.clusterer
    }

    /// Resolve and run `request` against `emails`.
    ///
    /// Fails only when the request names an email that is not in `emails`.
    /// An empty mailbox or no qualifying group yields an empty list.
    pub fn find<'a>(&self, emails: &'a [Email], request: &SimilarRequest) -> Result<Vec<&'a Email>> {
        let threshold = request.threshold();

        match request.target_id() {
            Some(id) => {
                let target = emails
                    .iter()
                    .find(|e| e.id == id)
                    .ok_or_else(|| MbzError::TargetNotFound { id: id.to_string() })?;
                tracing::debug!(target = %id, threshold, "finding emails similar to target");
                Ok(self.clusterer.matches_of(target, emails, threshold))
            }
            None => {
                tracing::debug!(emails = emails.len(), threshold, "finding largest similar group");
                Ok(self
                    .clusterer
                    .largest_group(emails, threshold)
                    .map(|g| g.emails)
                    .unwrap_or_default())
            }
        }
    }
}

/// [`SimilarityFinder::find`] with the default scorer.
pub fn find_similar<'a>(emails: &'a [Email], request: &SimilarRequest) -> Result<Vec<&'a Email>> {
    SimilarityFinder::default().find(emails, request)
}
