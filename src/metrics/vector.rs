//! Cosine similarity over pairwise TF-IDF vectors.

use std::collections::{BTreeSet, HashMap};

use super::tfidf::{pair_idf, weighted_vector};
use crate::context::PairContext;
use crate::metric::Metric;
use crate::types::MetricKind;

/// Scores a pair by the cosine of their TF-IDF weight vectors.
///
/// Because the IDF is taken over just the two documents, every term that
/// appears in both has zero weight, so this metric scores 0 for every input
/// pair, identical texts included. Stored scores depend on that, so the
/// formula is kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorSimilarity;

impl Metric for VectorSimilarity {
  fn kind(&self) -> MetricKind {
    MetricKind::VectorSimilarity
  }

  fn score(&self, context: &PairContext) -> f64 {
    let idf = pair_idf(context.reference, context.submission);
    let vec_a = weighted_vector(context.reference, &idf);
    let vec_b = weighted_vector(context.submission, &idf);

    cosine_similarity(&vec_a, &vec_b)
  }
}

/// Cosine similarity of two sparse vectors. Missing entries count as zero.
///
/// Returns 0.0 when either vector has zero magnitude. Terms are visited in
/// sorted order so the result does not depend on hash iteration order.
pub fn cosine_similarity(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
  let terms: BTreeSet<&str> = a.keys().chain(b.keys()).copied().collect();

  let mut dot = 0.0;
  let mut mag_a = 0.0;
  let mut mag_b = 0.0;

  for term in terms {
    let wa = a.get(term).copied().unwrap_or(0.0);
    let wb = b.get(term).copied().unwrap_or(0.0);
    dot += wa * wb;
    mag_a += wa * wa;
    mag_b += wb * wb;
  }

  let mag_a = mag_a.sqrt();
  let mag_b = mag_b.sqrt();

  if mag_a == 0.0 || mag_b == 0.0 {
    return 0.0;
  }

  dot / (mag_a * mag_b)
}
