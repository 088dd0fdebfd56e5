//! Word-frequency counting and summary statistics.
//!
//! Counting and statistics operate on the cleaned token stream produced by
//! the tokenizer. Ranking is stable: descending by count, ties broken by
//! first appearance in the source text.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Top-N word counts in descending frequency order.
///
/// Serializes as a JSON object whose keys appear in rank order: highest
/// count first, ties broken by first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFrequency(Vec<(String, u64)>);

impl WordFrequency {
    /// Returns the (word, count) entries in rank order.
    pub fn entries(&self) -> &[(String, u64)] {
        &self.0
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

/// Summary statistics over the cleaned token stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of tokens after cleaning.
    pub total_words: usize,
    /// Number of distinct tokens.
    pub unique_words: usize,
    /// Mean token length in characters, rounded to 2 decimal places.
    /// Zero when there are no tokens.
    pub avg_word_length: f64,
}

/// Counts token occurrences and returns the top `num_results` entries.
///
/// The sort is stable: descending by count, with ties keeping
/// first-encountered order. `num_results == 0` yields an empty mapping.
pub fn count_words(tokens: &[String], num_results: usize) -> WordFrequency {
    let mut order: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(token, order.len());
                order.push((token.clone(), 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(num_results);
    WordFrequency(order)
}

/// Computes totals and mean word length for the cleaned token stream.
///
/// `avg_word_length` is 0 when `tokens` is empty.
pub fn compute_statistics(tokens: &[String]) -> Statistics {
    let total_words = tokens.len();
    let unique_words = tokens.iter().collect::<HashSet<_>>().len();
    let avg_word_length = if total_words == 0 {
        0.0
    } else {
        let chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        round2(chars as f64 / total_words as f64)
    };

    Statistics {
        total_words,
        unique_words,
        avg_word_length,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
