//! Term statistics for a pair of documents.
//!
//! IDF here is computed over exactly the two documents being compared. With
//! `idf(t) = ln(2 / df)`, a term present in both documents gets weight zero and
//! a term present in only one gets `ln 2`. Nothing is cached between calls.

use std::collections::{HashMap, HashSet};

use super::tokenizer::term_counts;

/// Number of documents in a pairwise comparison.
const PAIR_SIZE: f64 = 2.0;

/// Term frequency of each distinct token: occurrences divided by the total
/// token count. Returns an empty map for an empty token list.
pub fn term_frequency(tokens: &[String]) -> HashMap<&str, f64> {
  let total = tokens.len() as f64;

  term_counts(tokens)
    .into_iter()
    .map(|(token, count)| (token, count as f64 / total))
    .collect()
}

/// Inverse document frequency over the union of both documents' tokens.
pub fn pair_idf<'a>(tokens_a: &'a [String], tokens_b: &'a [String]) -> HashMap<&'a str, f64> {
  let set_a: HashSet<&str> = tokens_a.iter().map(String::as_str).collect();
  let set_b: HashSet<&str> = tokens_b.iter().map(String::as_str).collect();

  set_a
    .union(&set_b)
    .map(|&token| {
      let doc_count = if set_a.contains(token) && set_b.contains(token) {
        2.0
      } else {
        1.0
      };
      (token, (PAIR_SIZE / doc_count).ln())
    })
    .collect()
}

/// TF-IDF weight of each of the document's own tokens.
pub fn weighted_vector<'a>(
  tokens: &'a [String],
  idf: &HashMap<&str, f64>,
) -> HashMap<&'a str, f64> {
  term_frequency(tokens)
    .into_iter()
    .map(|(token, tf)| (token, tf * idf.get(token).copied().unwrap_or(0.0)))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::metrics::tokenizer::tokenize;

  #[test]
  fn test_term_frequency() {
    let tokens = tokenize("wait hold wait circular");
    let tf = term_frequency(&tokens);
    assert_eq!(tf.get("wait"), Some(&0.5));
    assert_eq!(tf.get("hold"), Some(&0.25));
    assert_eq!(tf.get("circular"), Some(&0.25));
    assert!((tf.values().sum::<f64>() - 1.0).abs() < 1e-12);
  }

  #[test]
  fn test_term_frequency_empty() {
    assert!(term_frequency(&[]).is_empty());
  }

  #[test]
  fn test_pair_idf() {
    let a = tokenize("mutex semaphore monitor");
    let b = tokenize("mutex spinlock");
    let idf = pair_idf(&a, &b);

    assert_eq!(idf.len(), 4);
    assert_eq!(idf.get("mutex"), Some(&0.0));
    for token in ["semaphore", "monitor", "spinlock"] {
      assert!((idf[token] - std::f64::consts::LN_2).abs() < 1e-12);
    }
  }

  #[test]
  fn test_weighted_vector_zeroes_shared_terms() {
    let a = tokenize("mutex mutex semaphore");
    let b = tokenize("mutex spinlock");
    let idf = pair_idf(&a, &b);
    let vec_a = weighted_vector(&a, &idf);

    assert_eq!(vec_a.len(), 2);
    assert_eq!(vec_a.get("mutex"), Some(&0.0));
    let expected = std::f64::consts::LN_2 / 3.0;
    assert!((vec_a["semaphore"] - expected).abs() < 1e-12);
    assert!(!vec_a.contains_key("spinlock"));
  }
}
