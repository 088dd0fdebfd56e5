//! Text cleaning and tokenization.
//!
//! A deterministic pipeline over the extracted page text: whitespace
//! collapse and lowercasing, URL and digit removal, whitespace splitting,
//! punctuation stripping, then stop-word and length filtering. Token order
//! and duplicates are preserved from the source text.

use crate::config::MIN_TOKEN_CHARS;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").expect("valid URL pattern"));
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

/// The cleaned token stream plus bookkeeping from the filtering steps.
#[derive(Debug)]
pub struct CleanedText {
    /// Cleaned tokens in source order, duplicates retained.
    pub tokens: Vec<String>,
    /// Number of token occurrences removed by the stop-word filter.
    pub stopwords_removed: usize,
}

/// Cleans `text` and splits it into tokens, filtering `stop_words`.
///
/// The steps run in a fixed order: collapse whitespace runs and lowercase,
/// strip URL-like substrings and digit runs, split on whitespace, trim
/// leading/trailing ASCII punctuation from each token, then drop empty
/// tokens, stop words, and tokens shorter than [`MIN_TOKEN_CHARS`].
pub fn clean_and_tokenize(text: &str, stop_words: &HashSet<String>) -> CleanedText {
    let collapsed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let no_urls = URL_RE.replace_all(&collapsed, "");
    let no_digits = DIGITS_RE.replace_all(&no_urls, "");

    let mut tokens = Vec::new();
    let mut stopwords_removed = 0;
    for raw in no_digits.split_whitespace() {
        let token = raw.trim_matches(|c: char| c.is_ascii_punctuation());
        if token.is_empty() {
            continue;
        }
        if stop_words.contains(token) {
            stopwords_removed += 1;
            continue;
        }
        if token.chars().count() < MIN_TOKEN_CHARS {
            continue;
        }
        tokens.push(token.to_string());
    }

    CleanedText {
        tokens,
        stopwords_removed,
    }
}
