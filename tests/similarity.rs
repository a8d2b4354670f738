use textoverlap::calculate_similarity;
use textoverlap::prelude::*;

const SAMPLES: &[(&str, &str)] = &[
  (
    "mutual exclusion hold wait circular wait",
    "mutual exclusion hold wait circular wait",
  ),
  (
    "A deadlock requires mutual exclusion, hold and wait, no preemption and circular wait.",
    "Deadlock happens when processes hold resources and wait in a circular chain.",
  ),
  (
    "Paging divides memory into fixed-size frames.",
    "Segmentation uses variable sized segments instead of frames.",
  ),
  ("unique alpha beta gamma", "totally different delta epsilon zeta"),
  ("   ", "whitespace only reference"),
];

#[test]
fn test_identical_texts() {
  let text = "mutual exclusion hold wait circular wait";
  let result = calculate_similarity(text, text);

  assert_eq!(result.breakdown.vector_similarity, 0.0);
  assert_eq!(result.breakdown.keyword_overlap, 100.0);
  assert_eq!(result.breakdown.concept_coverage, 100.0);
  assert_eq!(result.score, 50.0);
  assert_eq!(result.interpretation, "Partial match");

  assert_eq!(
    result.details.reference_keywords,
    vec!["mutual", "exclusion", "hold", "wait", "circular"]
  );
  assert_eq!(result.details.matched_keywords, result.details.reference_keywords);
}

#[test]
fn test_empty_input_is_invalid() {
  let engine = SimilarityEngine::default();

  for (reference, submission) in [("", "anything"), ("anything", ""), ("", "")] {
    let result = engine.compare(reference, submission);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.breakdown, ScoreBreakdown::default());
    assert_eq!(result.interpretation, "Invalid input");
    assert!(result.details.is_empty());
    assert!(engine.is_invalid(&result));
  }
}

#[test]
fn test_missing_input_is_invalid() {
  let engine = SimilarityEngine::default();
  let result = engine.compare_opt(None, Some("anything"));
  assert_eq!(result.interpretation, "Invalid input");
  assert!(engine.is_invalid(&result));

  let result = engine.compare_opt(Some("deadlock"), Some("deadlock"));
  assert!(!engine.is_invalid(&result));
}

#[test]
fn test_whitespace_only_is_scored_not_invalid() {
  let engine = SimilarityEngine::default();
  let result = engine.compare("   ", "deadlock avoidance");

  assert_eq!(result.score, 0.0);
  assert_eq!(result.interpretation, "Very low match");
  assert!(!engine.is_invalid(&result));
}

#[test]
fn test_disjoint_texts() {
  let result = calculate_similarity(
    "unique alpha beta gamma",
    "totally different delta epsilon zeta",
  );

  assert_eq!(result.breakdown.vector_similarity, 0.0);
  assert_eq!(result.breakdown.keyword_overlap, 0.0);
  assert_eq!(result.breakdown.concept_coverage, 0.0);
  assert_eq!(result.score, 0.0);
  assert_eq!(result.interpretation, "Very low match");
  assert!(result.details.matched_keywords.is_empty());
}

#[test]
fn test_vector_similarity_is_always_zero() {
  for (reference, submission) in SAMPLES {
    let result = calculate_similarity(reference, submission);
    assert_eq!(result.breakdown.vector_similarity, 0.0, "{reference:?}");
  }
}

#[test]
fn test_score_never_exceeds_fifty() {
  for (reference, submission) in SAMPLES {
    assert!(calculate_similarity(reference, submission).score <= 50.0);
    assert!(calculate_similarity(submission, reference).score <= 50.0);
  }
}

#[test]
fn test_deterministic() {
  for (reference, submission) in SAMPLES {
    let first = calculate_similarity(reference, submission);
    let second = calculate_similarity(reference, submission);
    assert_eq!(first, second);
  }
}

#[test]
fn test_keyword_overlap_is_symmetric() {
  for (reference, submission) in SAMPLES {
    let forward = calculate_similarity(reference, submission);
    let backward = calculate_similarity(submission, reference);
    assert_eq!(
      forward.breakdown.keyword_overlap,
      backward.breakdown.keyword_overlap
    );
  }
}

#[test]
fn test_concept_coverage_is_asymmetric() {
  let reference = "deadlock deadlock";
  let submission = "deadlock deadlock starvation scheduler";

  let forward = calculate_similarity(reference, submission);
  let backward = calculate_similarity(submission, reference);

  assert_eq!(forward.breakdown.concept_coverage, 100.0);
  assert_eq!(backward.breakdown.concept_coverage, 33.3);
}

#[test]
fn test_partial_overlap_breakdown() {
  let result = calculate_similarity(
    "Paging divides memory into fixed-size frames.",
    "Segmentation uses variable sized segments instead of frames.",
  );

  // one shared token ("frames") out of 13 distinct
  assert_eq!(result.breakdown.keyword_overlap, 7.7);
  // the only reference concept, "divides", is not in the submission
  assert_eq!(result.breakdown.concept_coverage, 0.0);
  assert_eq!(result.score, 2.3);
  assert_eq!(result.interpretation, "Very low match");
  assert_eq!(result.details.matched_keywords, vec!["frames"]);
}

#[test]
fn test_threshold_boundaries_use_upper_band() {
  let engine = SimilarityEngine::default();
  assert_eq!(engine.interpret(80.0), "Excellent match");
  assert_eq!(engine.interpret(60.0), "Good match");
  assert_eq!(engine.interpret(40.0), "Partial match");
  assert_eq!(engine.interpret(20.0), "Low match");
  assert_eq!(engine.interpret(19.9), "Very low match");
}

#[test]
fn test_compare_batch_preserves_order() {
  let engine = SimilarityEngine::default();
  let results = engine.compare_batch(SAMPLES);

  assert_eq!(results.len(), SAMPLES.len());
  for ((reference, submission), result) in SAMPLES.iter().zip(&results) {
    assert_eq!(result, &engine.compare(reference, submission));
  }
}

#[test]
fn test_engine_is_shareable_across_threads() {
  let engine = &SimilarityEngine::default();
  let expected = engine.compare(SAMPLES[1].0, SAMPLES[1].1);

  std::thread::scope(|scope| {
    let handles: Vec<_> = (0..4)
      .map(|_| scope.spawn(move || engine.compare(SAMPLES[1].0, SAMPLES[1].1)))
      .collect();
    for handle in handles {
      assert_eq!(handle.join().unwrap(), expected);
    }
  });
}

#[cfg(feature = "serde")]
#[test]
fn test_json_uses_camel_case() {
  let result = calculate_similarity("deadlock detection", "deadlock prevention");
  let json = result.to_json().unwrap();

  for key in [
    "\"score\"",
    "\"breakdown\"",
    "\"vectorSimilarity\"",
    "\"keywordOverlap\"",
    "\"conceptCoverage\"",
    "\"interpretation\"",
    "\"referenceKeywords\"",
    "\"submissionKeywords\"",
    "\"matchedKeywords\"",
  ] {
    assert!(json.contains(key), "missing {key} in {json}");
  }

  let parsed: SimilarityResult = serde_json::from_str(&json).unwrap();
  assert_eq!(parsed, result);
}
