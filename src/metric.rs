//! The `Metric` trait, which defines the interface for similarity plugins.

use crate::context::PairContext;
use crate::types::MetricKind;

/// A trait for metrics that score how similar two token lists are.
///
/// The `SimilarityEngine` evaluates every registered metric on the same
/// `PairContext` and combines their values with a weighted sum. The built-in
/// metrics fill the `ScoreBreakdown`; metrics of kind `MetricKind::Custom`
/// only contribute to the overall score.
///
/// The `Send` and `Sync` bounds let the engine evaluate metrics concurrently
/// and be shared across threads.
pub trait Metric: Send + Sync {
  /// Returns the `MetricKind` of this metric.
  ///
  /// The engine uses it to look up the metric's weight in `ScoringRules` and
  /// to place its value in the breakdown.
  fn kind(&self) -> MetricKind;

  /// Scores a pair of documents.
  ///
  /// The value is a fraction between 0.0 and 1.0. The engine clamps anything
  /// outside that range, and treats NaN as 0.0.
  fn score(&self, context: &PairContext) -> f64;
}
