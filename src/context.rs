//! Context provided to metrics while scoring one pair of documents.

use crate::rules::ScoringRules;

/// The tokenized reference and submission for a single comparison.
///
/// A `PairContext` is built once per call and handed to every registered
/// `Metric`. Tokens are already lowercased and filtered, in document order.
pub struct PairContext<'a> {
  /// Tokens of the reference ("expected") document.
  pub reference: &'a [String],
  /// Tokens of the submitted document.
  pub submission: &'a [String],
  /// The rules the engine is scoring with.
  pub rules: &'a ScoringRules,
}

impl<'a> PairContext<'a> {
  /// Creates a new `PairContext` over two token lists.
  pub fn new(reference: &'a [String], submission: &'a [String], rules: &'a ScoringRules) -> Self {
    Self {
      reference,
      submission,
      rules,
    }
  }

  /// Returns true if either side produced no tokens.
  pub fn has_empty_side(&self) -> bool {
    self.reference.is_empty() || self.submission.is_empty()
  }
}
