//! Text normalization and tokenization.

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// English function words removed before scoring.
pub const STOP_WORDS: &[&str] = &[
  "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
  "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
  "would", "could", "should", "may", "might", "can", "this", "that", "these", "those", "it",
];

/// Tokens shorter than this are dropped by [`tokenize`].
pub const MIN_TOKEN_LENGTH: usize = 3;

/// Returns true if `token` is in the stop-word list.
pub fn is_stop_word(token: &str) -> bool {
  STOP_WORDS.contains(&token)
}

/// Length of a token in user-perceived characters.
pub fn token_length(token: &str) -> usize {
  token.graphemes(true).count()
}

/// Tokenize text into lowercase words, dropping short tokens and stop words.
pub fn tokenize(text: &str) -> Vec<String> {
  tokenize_with_min_length(text, MIN_TOKEN_LENGTH)
}

/// Like [`tokenize`], but with a custom minimum token length.
pub fn tokenize_with_min_length(text: &str, min_length: usize) -> Vec<String> {
  let cleaned: String = text
    .to_lowercase()
    .chars()
    .map(|c| {
      if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
        c
      } else {
        ' '
      }
    })
    .collect();

  cleaned
    .split_whitespace()
    .filter(|token| token_length(token) >= min_length)
    .filter(|token| !is_stop_word(token))
    .map(str::to_string)
    .collect()
}

/// Count occurrences of each token.
pub fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
  let mut counts = HashMap::new();

  for token in tokens {
    *counts.entry(token.as_str()).or_insert(0) += 1;
  }

  counts
}

/// Distinct tokens in order of first appearance.
pub fn distinct(tokens: &[String]) -> Vec<&str> {
  let mut seen = std::collections::HashSet::new();
  tokens
    .iter()
    .map(String::as_str)
    .filter(|token| seen.insert(*token))
    .collect()
}
