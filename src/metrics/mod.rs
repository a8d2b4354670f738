//! The built-in similarity metrics and the text processing they share.
//!
//! # Available Metrics
//!
//! - [`VectorSimilarity`](crate::metrics::VectorSimilarity): cosine similarity of
//!   pairwise TF-IDF vectors.
//! - [`KeywordOverlap`](crate::metrics::KeywordOverlap): Jaccard overlap of the
//!   distinct tokens.
//! - [`ConceptCoverage`](crate::metrics::ConceptCoverage): share of the
//!   reference's repeated or long tokens found in the submission.
//!
//! # Example: Scoring With a Single Metric
//!
//! ```rust
//! use textoverlap::prelude::*;
//! use textoverlap::metrics::KeywordOverlap;
//!
//! let engine = SimilarityEngine::builder()
//!     .rules(ScoringRules::builder().weight(MetricKind::KeywordOverlap, 1.0).build())
//!     .with(Box::new(KeywordOverlap))
//!     .build();
//!
//! let result = engine.compare("process thread scheduler", "thread scheduler");
//! assert_eq!(result.breakdown.keyword_overlap, 66.7);
//! ```

/// Implements concept coverage.
pub mod concept;
/// Implements keyword overlap.
pub mod keyword;
/// Term frequency, pairwise IDF, and weighted vectors.
pub mod tfidf;
/// Provides text tokenization utilities for metrics.
pub mod tokenizer;
/// Implements vector-space (cosine) similarity.
pub mod vector;

pub use concept::ConceptCoverage;
pub use keyword::KeywordOverlap;
pub use vector::VectorSimilarity;
