//! Near-duplicate grouping over a mailbox snapshot.

use crate::scorer::Scorer;
use mbz_core::Email;
use std::collections::HashSet;

/// A set of similar emails and their mean pairwise score.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailGroup<'a> {
    pub emails: Vec<&'a Email>,
    pub similarity: f64,
}

impl<'a> EmailGroup<'a> {
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.emails.iter().map(|e| e.id.as_str()).collect()
    }
}

/// Groups emails with a [`Scorer`] and a threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clusterer {
    pub scorer: Scorer,
}

impl Clusterer {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    /// Greedy anchored grouping in input order.
    ///
    /// Each unclaimed email anchors a group and pulls in every later
    /// unclaimed email scoring at least `threshold` against the anchor.
    /// Groups of one are dropped. No email lands in two groups.
    pub fn group_similar<'a>(&self, emails: &'a [Email], threshold: f64) -> Vec<EmailGroup<'a>> {
        let mut processed: HashSet<&str> = HashSet::new();
        let mut groups = Vec::new();

        for (i, anchor) in emails.iter().enumerate() {
            if !processed.insert(anchor.id.as_str()) {
                continue;
            }
            let mut members = vec![anchor];

            for candidate in &emails[i + 1..] {
                if processed.contains(candidate.id.as_str()) {
                    continue;
                }
                if self.scorer.score(anchor, candidate) >= threshold {
                    processed.insert(candidate.id.as_str());
                    members.push(candidate);
                }
            }

            if members.len() > 1 {
                let similarity = self.group_similarity(&members);
                tracing::debug!(
                    anchor = %anchor.id,
                    size = members.len(),
                    similarity,
                    "formed similarity group"
                );
                groups.push(EmailGroup { emails: members, similarity });
            }
        }
        groups
    }

    /// The group with the most members; the earliest formed wins a tie.
    pub fn largest_group<'a>(&self, emails: &'a [Email], threshold: f64) -> Option<EmailGroup<'a>> {
        let groups = self.group_similar(emails, threshold);
        let total = groups.len();

        let mut best: Option<EmailGroup<'a>> = None;
        for group in groups {
            if best.as_ref().map_or(true, |b| group.len() > b.len()) {
                best = Some(group);
            }
        }

        if let Some(group) = &best {
            tracing::debug!(groups = total, size = group.len(), "selected largest group");
        }
        best
    }

    /// `target` first, then every other email scoring at least `threshold`
    /// against it, in input order.
    pub fn matches_of<'a>(&self, target: &'a Email, emails: &'a [Email], threshold: f64) -> Vec<&'a Email> {
        let mut matches = vec![target];
        matches.extend(
            emails
                .iter()
                .filter(|e| e.id != target.id)
                .filter(|e| self.scorer.score(target, e) >= threshold),
        );
        tracing::debug!(target = %target.id, matches = matches.len() - 1, "matched target");
        matches
    }

    /// Mean score over all unordered pairs; 0.0 below two members.
    pub fn group_similarity(&self, emails: &[&Email]) -> f64 {
        if emails.len() < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        let mut count = 0usize;
        for (i, a) in emails.iter().enumerate() {
            for b in &emails[i + 1..] {
                total += self.scorer.score(a, b);
                count += 1;
            }
        }
        total / count as f64
    }
}

/// [`Clusterer::group_similar`] with the default scorer.
pub fn group_similar(emails: &[Email], threshold: f64) -> Vec<EmailGroup<'_>> {
    Clusterer::default().group_similar(emails, threshold)
}

/// [`Clusterer::largest_group`] with the default scorer.
pub fn largest_group(emails: &[Email], threshold: f64) -> Option<EmailGroup<'_>> {
    Clusterer::default().largest_group(emails, threshold)
}

/// [`Clusterer::matches_of`] with the default scorer.
pub fn matches_of<'a>(target: &'a Email, emails: &'a [Email], threshold: f64) -> Vec<&'a Email> {
    Clusterer::default().matches_of(target, emails, threshold)
}
