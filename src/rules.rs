//! Scoring rules: metric weights, token thresholds, and the label ladder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::OverlapError;
use crate::metrics::tokenizer::MIN_TOKEN_LENGTH;
use crate::types::MetricKind;

/// Label attached to the sentinel result for missing or empty input.
pub const DEFAULT_INVALID_LABEL: &str = "Invalid input";

/// Configuration for a [`SimilarityEngine`](crate::engine::SimilarityEngine).
///
/// The defaults reproduce the reference scoring model exactly; change them
/// only if results no longer need to match previously stored scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoringRules {
    /// Weight of each built-in metric in the overall score.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: MetricWeights,
    /// Tokens with fewer characters than this are discarded.
    #[cfg_attr(feature = "serde", serde(default = "default_min_token_length"))]
    pub min_token_length: usize,
    /// Tokens with at least this many characters count as key concepts.
    #[cfg_attr(feature = "serde", serde(default = "default_concept_min_length"))]
    pub concept_min_length: usize,
    /// Maximum number of entries in each keyword sample list.
    #[cfg_attr(feature = "serde", serde(default = "default_sample_limit"))]
    pub sample_limit: usize,
    /// Qualitative labels, evaluated top-down.
    #[cfg_attr(feature = "serde", serde(default = "default_bands"))]
    pub bands: Vec<InterpretationBand>,
    /// Label of the empty-input sentinel.
    #[cfg_attr(feature = "serde", serde(default = "default_invalid_label"))]
    pub invalid_label: String,
}

fn default_min_token_length() -> usize {
    MIN_TOKEN_LENGTH
}

fn default_concept_min_length() -> usize {
    7
}

fn default_sample_limit() -> usize {
    10
}

fn default_invalid_label() -> String {
    DEFAULT_INVALID_LABEL.to_string()
}

fn default_bands() -> Vec<InterpretationBand> {
    vec![
        InterpretationBand::new(80.0, "Excellent match"),
        InterpretationBand::new(60.0, "Good match"),
        InterpretationBand::new(40.0, "Partial match"),
        InterpretationBand::new(20.0, "Low match"),
        InterpretationBand::new(0.0, "Very low match"),
    ]
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            weights: MetricWeights::default(),
            min_token_length: default_min_token_length(),
            concept_min_length: default_concept_min_length(),
            sample_limit: default_sample_limit(),
            bands: default_bands(),
            invalid_label: default_invalid_label(),
        }
    }
}

impl ScoringRules {
    /// Create a new rules builder, starting from the defaults.
    pub fn builder() -> ScoringRulesBuilder {
        ScoringRulesBuilder::default()
    }

    /// Parse rules from JSON. Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, OverlapError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that the rules describe a usable scoring model.
    pub fn validate(&self) -> Result<(), OverlapError> {
        let result = self.check();
        if let Err(e) = &result {
            warn!(error = %e, "rejected scoring rules");
        }
        result
    }

    fn check(&self) -> Result<(), OverlapError> {
        self.weights.validate()?;

        let Some(first) = self.bands.first() else {
            return Err(OverlapError::EmptyLadder);
        };
        let mut previous = first.min_score;
        for band in &self.bands[1..] {
            if !(band.min_score < previous) {
                return Err(OverlapError::UnsortedLadder(
                    band.label.clone(),
                    band.min_score,
                    previous,
                ));
            }
            previous = band.min_score;
        }

        if self.sample_limit == 0 {
            return Err(OverlapError::ZeroSampleLimit);
        }
        Ok(())
    }

    /// Pick the label for a final score.
    ///
    /// Bands are inclusive at their lower bound, so a score sitting exactly on
    /// a boundary gets the upper band's label. Scores below every band get the
    /// last band's label.
    pub fn interpret(&self, score: f64) -> &str {
        self.bands
            .iter()
            .find(|band| score >= band.min_score)
            .or_else(|| self.bands.last())
            .map(|band| band.label.as_str())
            .unwrap_or(self.invalid_label.as_str())
    }
}

/// Builder for scoring rules.
#[derive(Debug, Default)]
pub struct ScoringRulesBuilder {
    rules: ScoringRules,
}

impl ScoringRulesBuilder {
    /// Set the weight of a built-in metric. Custom kinds are ignored.
    pub fn weight(mut self, kind: MetricKind, weight: f64) -> Self {
        self.rules.weights.set(kind, weight);
        self
    }

    /// Set the minimum token length.
    pub fn min_token_length(mut self, len: usize) -> Self {
        self.rules.min_token_length = len;
        self
    }

    /// Set the minimum length of a key concept.
    pub fn concept_min_length(mut self, len: usize) -> Self {
        self.rules.concept_min_length = len;
        self
    }

    /// Set the keyword sample limit.
    pub fn sample_limit(mut self, limit: usize) -> Self {
        self.rules.sample_limit = limit;
        self
    }

    /// Replace the label ladder.
    pub fn bands(mut self, bands: Vec<InterpretationBand>) -> Self {
        self.rules.bands = bands;
        self
    }

    /// Set the label used for empty input.
    pub fn invalid_label(mut self, label: impl Into<String>) -> Self {
        self.rules.invalid_label = label.into();
        self
    }

    /// Build the rules without validating them.
    pub fn build(self) -> ScoringRules {
        self.rules
    }
}

/// Weights applied to the built-in metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetricWeights {
    pub vector_similarity: f64,
    pub keyword_overlap: f64,
    pub concept_coverage: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            vector_similarity: 0.5,
            keyword_overlap: 0.3,
            concept_coverage: 0.2,
        }
    }
}

impl MetricWeights {
    /// The weight for a metric kind. Custom metrics carry their own weight.
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::VectorSimilarity => Some(self.vector_similarity),
            MetricKind::KeywordOverlap => Some(self.keyword_overlap),
            MetricKind::ConceptCoverage => Some(self.concept_coverage),
            MetricKind::Custom => None,
        }
    }

    fn set(&mut self, kind: MetricKind, weight: f64) {
        match kind {
            MetricKind::VectorSimilarity => self.vector_similarity = weight,
            MetricKind::KeywordOverlap => self.keyword_overlap = weight,
            MetricKind::ConceptCoverage => self.concept_coverage = weight,
            MetricKind::Custom => {}
        }
    }

    fn validate(&self) -> Result<(), OverlapError> {
        for (name, weight) in [
            ("vector_similarity", self.vector_similarity),
            ("keyword_overlap", self.keyword_overlap),
            ("concept_coverage", self.concept_coverage),
        ] {
            validate_weight(name, weight)?;
        }
        validate_weight_sum(self.vector_similarity + self.keyword_overlap + self.concept_coverage)
    }
}

/// Slack for float error when weights like 0.5 + 0.3 + 0.2 are summed.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// A usable set of weights sums to more than 0 and at most 1, so the final
/// score stays within 0 to 100.
pub(crate) fn validate_weight_sum(total: f64) -> Result<(), OverlapError> {
    if total == 0.0 {
        Err(OverlapError::ZeroWeightSum)
    } else if total > 1.0 + WEIGHT_SUM_EPSILON {
        Err(OverlapError::WeightSumExceedsOne(total))
    } else {
        Ok(())
    }
}

pub(crate) fn validate_weight(name: &str, weight: f64) -> Result<(), OverlapError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(OverlapError::InvalidWeight(name.to_string(), weight))
    }
}

/// One rung of the interpretation ladder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InterpretationBand {
    /// Inclusive lower bound on the final score (0 to 100).
    pub min_score: f64,
    pub label: String,
}

impl InterpretationBand {
    pub fn new(min_score: f64, label: impl Into<String>) -> Self {
        Self {
            min_score,
            label: label.into(),
        }
    }
}
