//! The similarity engine that combines metrics into one score.

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::context::PairContext;
use crate::errors::OverlapError;
use crate::metric::Metric;
use crate::metrics::tokenizer::{distinct, tokenize_with_min_length};
use crate::metrics::{ConceptCoverage, KeywordOverlap, VectorSimilarity};
use crate::rules::{validate_weight, validate_weight_sum, ScoringRules};
use crate::types::{KeywordDetails, MetricKind, ScoreBreakdown, SimilarityResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compares a reference text with a submission using the default engine.
///
/// # Examples
///
/// ```rust
/// use textoverlap::calculate_similarity;
///
/// let result = calculate_similarity(
///     "mutual exclusion hold wait circular wait",
///     "mutual exclusion hold wait circular wait",
/// );
/// assert_eq!(result.score, 50.0);
/// assert_eq!(result.interpretation, "Partial match");
/// ```
pub fn calculate_similarity(reference: &str, submission: &str) -> SimilarityResult {
  static DEFAULT_ENGINE: OnceLock<SimilarityEngine> = OnceLock::new();
  DEFAULT_ENGINE
    .get_or_init(SimilarityEngine::default)
    .compare(reference, submission)
}

/// A metric registered with the engine, together with its weight.
struct WeightedMetric {
  metric: Box<dyn Metric>,
  weight: f64,
}

/// The engine that scores a reference text against a submission.
///
/// `SimilarityEngine` tokenizes both texts once, evaluates every registered
/// [`Metric`] on the resulting [`PairContext`], and blends their values with a
/// weighted sum. The engine holds no per-call state, so one instance can be
/// shared freely between threads.
///
/// Create a `SimilarityEngine` with [`SimilarityEngine::default`] for the
/// standard three-metric model, or with [`SimilarityEngineBuilder`].
///
/// # Examples
///
/// ```rust
/// use textoverlap::prelude::*;
///
/// let engine = SimilarityEngine::default();
/// let result = engine.compare(
///     "A deadlock needs mutual exclusion and circular wait",
///     "Circular wait and mutual exclusion cause deadlock",
/// );
///
/// assert_eq!(result.breakdown.vector_similarity, 0.0);
/// assert!(result.score <= 50.0);
/// ```
pub struct SimilarityEngine {
  /// The registered metrics, in evaluation order.
  metrics: Vec<WeightedMetric>,
  /// Token thresholds, labels, and sample limits.
  rules: ScoringRules,
}

impl Default for SimilarityEngine {
  /// Creates an engine with the three built-in metrics and default rules.
  fn default() -> Self {
    Self::builder().with_defaults().build()
  }
}

impl SimilarityEngine {
  /// Creates a new `SimilarityEngineBuilder` to construct an engine.
  pub fn builder() -> SimilarityEngineBuilder {
    SimilarityEngineBuilder::new()
  }

  /// The rules this engine scores with.
  pub fn rules(&self) -> &ScoringRules {
    &self.rules
  }

  /// Compares `reference` against `submission`.
  ///
  /// Order matters: the reference's key concepts define the denominator of
  /// concept coverage. If either text is empty, the result is the zero-score
  /// sentinel labelled with `ScoringRules::invalid_label`. Every other input,
  /// including whitespace-only text, goes through the full pipeline.
  ///
  /// ## Pipeline
  ///
  /// 1.  **Tokenization**: both texts are lowercased, stripped of punctuation,
  ///     and filtered for short tokens and stop words.
  /// 2.  **Metric Evaluation**: each registered metric scores the pair as a
  ///     fraction in 0..=1. With the `parallel` feature this runs concurrently.
  /// 3.  **Aggregation**: values are combined by weight, in registration order.
  /// 4.  **Formatting**: the score and breakdown are scaled to percentages and
  ///     rounded to one decimal, a label is picked from the ladder, and
  ///     keyword samples are attached.
  pub fn compare(&self, reference: &str, submission: &str) -> SimilarityResult {
    if reference.is_empty() || submission.is_empty() {
      debug!(
        reference_len = reference.len(),
        submission_len = submission.len(),
        "empty input, returning sentinel result"
      );
      return SimilarityResult::invalid(self.rules.invalid_label.as_str());
    }

    let tokens_a = tokenize_with_min_length(reference, self.rules.min_token_length);
    let tokens_b = tokenize_with_min_length(submission, self.rules.min_token_length);
    let context = PairContext::new(&tokens_a, &tokens_b, &self.rules);

    let values = self.evaluate(&context);

    let mut raw_score = 0.0;
    let mut breakdown = ScoreBreakdown::default();
    for (kind, weight, value) in values {
      trace!(?kind, weight, value, "metric evaluated");
      raw_score += value * weight;
      breakdown.set(kind, to_percent(value));
    }

    // Unvalidated weights can push the sum outside 0..=1 or make it NaN.
    let score = to_percent(clamp_fraction(raw_score));
    let interpretation = self.rules.interpret(score).to_string();
    let details = self.keyword_details(&context);

    debug!(
      reference_tokens = tokens_a.len(),
      submission_tokens = tokens_b.len(),
      score,
      interpretation = %interpretation,
      "compared texts"
    );

    SimilarityResult {
      score,
      breakdown,
      interpretation,
      details,
    }
  }

  /// Like [`compare`](Self::compare), treating a missing text as empty.
  pub fn compare_opt(&self, reference: Option<&str>, submission: Option<&str>) -> SimilarityResult {
    self.compare(reference.unwrap_or_default(), submission.unwrap_or_default())
  }

  /// Compares many `(reference, submission)` pairs.
  ///
  /// Results are returned in input order. With the `parallel` feature the
  /// pairs are scored concurrently.
  pub fn compare_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<SimilarityResult>
  where
    A: AsRef<str> + Sync,
    B: AsRef<str> + Sync,
  {
    #[cfg(feature = "parallel")]
    let results = pairs
      .par_iter()
      .map(|(reference, submission)| self.compare(reference.as_ref(), submission.as_ref()))
      .collect();

    #[cfg(not(feature = "parallel"))]
    let results = pairs
      .iter()
      .map(|(reference, submission)| self.compare(reference.as_ref(), submission.as_ref()))
      .collect();

    results
  }

  /// The qualitative label for a final score.
  pub fn interpret(&self, score: f64) -> &str {
    self.rules.interpret(score)
  }

  /// Returns true if `result` is the sentinel for empty input.
  pub fn is_invalid(&self, result: &SimilarityResult) -> bool {
    result.interpretation == self.rules.invalid_label
      && result.score == 0.0
      && result.details.is_empty()
  }

  /// Runs every metric, returning `(kind, weight, value)` in registration order.
  fn evaluate(&self, context: &PairContext) -> Vec<(MetricKind, f64, f64)> {
    #[cfg(feature = "parallel")]
    let values = self
      .metrics
      .par_iter()
      .map(|m| (m.metric.kind(), m.weight, clamp_fraction(m.metric.score(context))))
      .collect();

    #[cfg(not(feature = "parallel"))]
    let values = self
      .metrics
      .iter()
      .map(|m| (m.metric.kind(), m.weight, clamp_fraction(m.metric.score(context))))
      .collect();

    values
  }

  fn keyword_details(&self, context: &PairContext) -> KeywordDetails {
    let limit = self.rules.sample_limit;
    let reference = distinct(context.reference);
    let submission = distinct(context.submission);

    let sample = |tokens: &[&str]| -> Vec<String> {
      tokens.iter().take(limit).map(|t| t.to_string()).collect()
    };

    // Membership is checked against the full submission token list.
    let matched: Vec<&str> = reference
      .iter()
      .copied()
      .filter(|token| context.submission.iter().any(|s| s.as_str() == *token))
      .collect();

    KeywordDetails {
      reference_keywords: sample(&reference),
      submission_keywords: sample(&submission),
      matched_keywords: sample(&matched),
    }
  }
}

/// Scale a 0..=1 fraction to a percentage with one decimal place.
fn to_percent(fraction: f64) -> f64 {
  (fraction * 100.0 * 10.0).round() / 10.0
}

fn clamp_fraction(value: f64) -> f64 {
  if value.is_nan() {
    0.0
  } else {
    value.clamp(0.0, 1.0)
  }
}

/// A builder for creating `SimilarityEngine` instances.
pub struct SimilarityEngineBuilder {
  metrics: Vec<(Box<dyn Metric>, Option<f64>)>,
  rules: ScoringRules,
}

impl Default for SimilarityEngineBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl SimilarityEngineBuilder {
  /// Creates a new, empty `SimilarityEngineBuilder` with default rules.
  pub fn new() -> Self {
    Self {
      metrics: Vec::new(),
      rules: ScoringRules::default(),
    }
  }

  /// Sets the scoring rules.
  pub fn rules(mut self, rules: ScoringRules) -> Self {
    self.rules = rules;
    self
  }

  /// Registers the built-in metrics: vector similarity, keyword overlap, and
  /// concept coverage, in that order.
  pub fn with_defaults(self) -> Self {
    self
      .with(Box::new(VectorSimilarity))
      .with(Box::new(KeywordOverlap))
      .with(Box::new(ConceptCoverage))
  }

  /// Registers a metric whose weight comes from the rules.
  ///
  /// Metrics of kind `MetricKind::Custom` have no weight in the rules and
  /// contribute nothing unless added with [`with_weight`](Self::with_weight).
  pub fn with(mut self, metric: Box<dyn Metric>) -> Self {
    self.metrics.push((metric, None));
    self
  }

  /// Registers a metric with an explicit weight.
  pub fn with_weight(mut self, metric: Box<dyn Metric>, weight: f64) -> Self {
    self.metrics.push((metric, Some(weight)));
    self
  }

  /// Builds the engine without validating the rules.
  ///
  /// Weights are taken as given. If they sum to more than 1, or any is
  /// negative, NaN, or infinite, the weighted sum is clamped to `0..=1` (NaN
  /// becomes 0) before scaling, so `score` stays within 0 to 100 but no
  /// longer reflects the weights. Use [`try_build`](Self::try_build) to reject
  /// such weights instead.
  pub fn build(self) -> SimilarityEngine {
    let rules = self.rules;
    let metrics = self
      .metrics
      .into_iter()
      .map(|(metric, weight)| {
        let weight = weight
          .or_else(|| rules.weights.get(metric.kind()))
          .unwrap_or(0.0);
        WeightedMetric { metric, weight }
      })
      .collect();

    SimilarityEngine { metrics, rules }
  }

  /// Builds the engine, rejecting invalid rules or weights.
  pub fn try_build(self) -> Result<SimilarityEngine, OverlapError> {
    self.rules.validate()?;
    let engine = self.build();

    for m in &engine.metrics {
      validate_weight(&format!("{:?}", m.metric.kind()), m.weight)?;
    }
    let total: f64 = engine.metrics.iter().map(|m| m.weight).sum();
    validate_weight_sum(total)?;

    Ok(engine)
  }
}
