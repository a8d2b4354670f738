//! Core data types returned by the similarity engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of comparing a reference answer against a submission.
///
/// Every field is derived from the two input texts alone. Scores are
/// percentages in the range 0.0 to 100.0, rounded to one decimal place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimilarityResult {
  /// The weighted overall score.
  pub score: f64,
  /// Per-metric scores that make up `score`.
  pub breakdown: ScoreBreakdown,
  /// A qualitative label chosen from the interpretation ladder.
  pub interpretation: String,
  /// Sample keywords from each side, for display. Empty for invalid input.
  #[cfg_attr(feature = "serde", serde(default))]
  pub details: KeywordDetails,
}

impl SimilarityResult {
  /// The zero-score result produced when either input is missing or empty.
  pub fn invalid(label: impl Into<String>) -> Self {
    Self {
      score: 0.0,
      breakdown: ScoreBreakdown::default(),
      interpretation: label.into(),
      details: KeywordDetails::default(),
    }
  }

  /// Serializes the result using the camelCase field names of the public API.
  #[cfg(feature = "serde")]
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}

/// Per-metric percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoreBreakdown {
  /// Cosine similarity of the pairwise TF-IDF vectors.
  pub vector_similarity: f64,
  /// Jaccard overlap of the two token sets.
  pub keyword_overlap: f64,
  /// Share of the reference's key concepts found in the submission.
  pub concept_coverage: f64,
}

impl ScoreBreakdown {
  /// Looks up the value reported for a built-in metric kind.
  ///
  /// Custom metrics contribute to the overall score but have no breakdown slot.
  pub fn get(&self, kind: MetricKind) -> Option<f64> {
    match kind {
      MetricKind::VectorSimilarity => Some(self.vector_similarity),
      MetricKind::KeywordOverlap => Some(self.keyword_overlap),
      MetricKind::ConceptCoverage => Some(self.concept_coverage),
      MetricKind::Custom => None,
    }
  }

  pub(crate) fn set(&mut self, kind: MetricKind, value: f64) {
    match kind {
      MetricKind::VectorSimilarity => self.vector_similarity = value,
      MetricKind::KeywordOverlap => self.keyword_overlap = value,
      MetricKind::ConceptCoverage => self.concept_coverage = value,
      MetricKind::Custom => {}
    }
  }
}

/// Keyword samples, each capped at the configured sample limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KeywordDetails {
  /// Distinct reference tokens in order of first appearance.
  pub reference_keywords: Vec<String>,
  /// Distinct submission tokens in order of first appearance.
  pub submission_keywords: Vec<String>,
  /// Distinct reference tokens that also occur in the submission.
  pub matched_keywords: Vec<String>,
}

impl KeywordDetails {
  pub fn is_empty(&self) -> bool {
    self.reference_keywords.is_empty()
      && self.submission_keywords.is_empty()
      && self.matched_keywords.is_empty()
  }
}

/// An enumeration of the metrics the engine knows how to combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MetricKind {
  /// Cosine similarity over pairwise TF-IDF weights.
  VectorSimilarity,
  /// Set overlap of the normalized tokens.
  KeywordOverlap,
  /// Coverage of the reference's repeated or long tokens.
  ConceptCoverage,
  /// A user-defined metric.
  Custom,
}
