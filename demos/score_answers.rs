//! Scores a few interview answers against their reference answers.

use textoverlap::prelude::*;

fn main() {
    println!("=== Textoverlap Answer Scoring Example ===\n");

    let engine = SimilarityEngine::default();

    let answers = vec![
        (
            "Mutual exclusion, hold and wait, no preemption and circular wait.",
            "mutual exclusion hold and wait no preemption circular wait",
        ),
        (
            "A process is a program in execution with its own address space.",
            "A process is a running program. Threads share the address space of their process.",
        ),
        (
            "Paging divides memory into fixed-size frames.",
            "I am not sure.",
        ),
        ("Virtual memory maps pages to frames.", ""),
    ];

    for (reference, submission) in &answers {
        let result = engine.compare(reference, submission);

        println!("Reference:  \"{}\"", reference);
        println!("Submission: \"{}\"", submission);
        println!(
            "  Score: {:.1} ({})",
            result.score, result.interpretation
        );
        println!(
            "  Breakdown: vector {:.1}, keywords {:.1}, concepts {:.1}",
            result.breakdown.vector_similarity,
            result.breakdown.keyword_overlap,
            result.breakdown.concept_coverage
        );
        if !result.details.matched_keywords.is_empty() {
            println!("  Matched: {}", result.details.matched_keywords.join(", "));
        }
        println!();
    }

    let results = engine.compare_batch(&answers);
    let flagged = results.iter().filter(|r| r.score >= 40.0).count();
    println!("{} of {} answers flagged for review", flagged, results.len());
}
