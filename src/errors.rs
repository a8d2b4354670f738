//! Error types for engine configuration.
//!
//! Scoring is total and never fails; only building an engine from
//! user-supplied rules can produce an error.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OverlapError {
  #[error("weight for {0} must be a finite, non-negative number (got {1})")]
  InvalidWeight(String, f64),

  #[error("metric weights sum to zero")]
  ZeroWeightSum,

  #[error("metric weights sum to {0}, which is more than 1")]
  WeightSumExceedsOne(f64),

  #[error("interpretation ladder is empty")]
  EmptyLadder,

  #[error("interpretation ladder must be sorted by descending min_score (band '{0}' at {1} follows {2})")]
  UnsortedLadder(String, f64, f64),

  #[error("sample limit must be at least 1")]
  ZeroSampleLimit,

  #[cfg(feature = "serde")]
  #[error("failed to parse scoring rules: {0}")]
  Parse(#[from] serde_json::Error),
}
