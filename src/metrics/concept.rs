//! Concept coverage: how many of the reference's key concepts the submission
//! mentions.

use std::collections::HashSet;

use super::tokenizer::{term_counts, token_length};
use crate::context::PairContext;
use crate::metric::Metric;
use crate::types::MetricKind;

/// Scores the share of the reference's key concepts found in the submission.
///
/// This metric is asymmetric: only the reference decides what counts as a
/// key concept, so swapping the two documents usually changes the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConceptCoverage;

impl Metric for ConceptCoverage {
  fn kind(&self) -> MetricKind {
    MetricKind::ConceptCoverage
  }

  fn score(&self, context: &PairContext) -> f64 {
    concept_coverage(
      context.reference,
      context.submission,
      context.rules.concept_min_length,
    )
  }
}

/// Tokens that occur more than once, or are at least `min_length` characters
/// long.
pub fn key_concepts(tokens: &[String], min_length: usize) -> HashSet<&str> {
  let counts = term_counts(tokens);

  counts
    .into_iter()
    .filter(|&(token, count)| count > 1 || token_length(token) >= min_length)
    .map(|(token, _)| token)
    .collect()
}

/// `|concepts(ref) ∩ concepts(sub)| / |concepts(ref)|`, or 0.0 if the
/// reference has no key concepts.
pub fn concept_coverage(reference: &[String], submission: &[String], min_length: usize) -> f64 {
  let concepts_a = key_concepts(reference, min_length);
  if concepts_a.is_empty() {
    return 0.0;
  }

  let concepts_b = key_concepts(submission, min_length);
  let covered = concepts_a.intersection(&concepts_b).count();

  covered as f64 / concepts_a.len() as f64
}
