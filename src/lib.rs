//! Textoverlap - pairwise similarity scoring for reference answers and
//! submitted transcripts.
//!
//! Textoverlap compares an expected answer with a candidate's submission and
//! produces a 0-100 score built from three metrics: vector-space similarity,
//! keyword overlap, and key-concept coverage. Scoring is a pure function of
//! the two texts; nothing is cached or shared between calls.

pub mod types;
pub mod errors;
pub mod rules;
pub mod context;
pub mod metric;
pub mod engine;
pub mod metrics;

pub use engine::calculate_similarity;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::types::*;
    pub use crate::errors::*;
    pub use crate::rules::*;
    pub use crate::context::*;
    pub use crate::metric::*;
    pub use crate::engine::*;
}
