//! Keyword overlap: Jaccard similarity of the two token sets.

use std::collections::HashSet;

use crate::context::PairContext;
use crate::metric::Metric;
use crate::types::MetricKind;

/// Scores a pair by shared distinct tokens over all distinct tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordOverlap;

impl Metric for KeywordOverlap {
  fn kind(&self) -> MetricKind {
    MetricKind::KeywordOverlap
  }

  fn score(&self, context: &PairContext) -> f64 {
    keyword_overlap(context.reference, context.submission)
  }
}

/// `|A ∩ B| / |A ∪ B|` over distinct tokens, or 0.0 if both are empty.
pub fn keyword_overlap(tokens_a: &[String], tokens_b: &[String]) -> f64 {
  let set_a: HashSet<&str> = tokens_a.iter().map(String::as_str).collect();
  let set_b: HashSet<&str> = tokens_b.iter().map(String::as_str).collect();

  let matches = set_a.intersection(&set_b).count();
  let total_unique = set_a.union(&set_b).count();

  if total_unique == 0 {
    return 0.0;
  }

  matches as f64 / total_unique as f64
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::metrics::tokenizer::tokenize;

  fn overlap(a: &str, b: &str) -> f64 {
    keyword_overlap(&tokenize(a), &tokenize(b))
  }

  #[test]
  fn test_identical_sets() {
    assert_eq!(overlap("hold wait circular", "circular wait hold hold"), 1.0);
  }

  #[test]
  fn test_partial_overlap() {
    // shared: mutex; union: mutex, semaphore, monitor, spinlock
    assert_eq!(overlap("mutex semaphore monitor", "mutex spinlock"), 0.25);
  }

  #[test]
  fn test_symmetric() {
    let (a, b) = ("process thread scheduler", "thread scheduler quantum slice");
    assert_eq!(overlap(a, b), overlap(b, a));
    assert_eq!(overlap(a, b), 0.4);
  }

  #[test]
  fn test_empty_union() {
    assert_eq!(overlap("", ""), 0.0);
    assert_eq!(overlap("the and", "a an"), 0.0);
    assert_eq!(overlap("mutex", ""), 0.0);
  }
}
