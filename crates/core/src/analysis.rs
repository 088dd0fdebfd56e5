//! Pipeline orchestration.
//!
//! Ties the stages together: language detection, stop-word resolution,
//! cleaning and tokenization, frequency counting, statistics. The pipeline
//! is infallible — detection and stop-word lookup fall back internally and
//! never surface an error to the request.

use crate::config::DEFAULT_NUM_RESULTS;
use crate::frequency::{self, Statistics, WordFrequency};
use crate::{language, stopwords, tokenize};
use serde::Serialize;

/// Caller-supplied knobs for a single analysis.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Number of top-frequency entries to return.
    pub num_results: usize,
    /// Extra stop words unioned with the built-in list, matched verbatim.
    pub custom_stop_words: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            num_results: DEFAULT_NUM_RESULTS,
            custom_stop_words: Vec::new(),
        }
    }
}

/// The complete result of analyzing one page of text.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Top-N word counts, descending, ties by first appearance.
    pub word_frequency: WordFrequency,
    /// Totals and mean word length over the cleaned tokens.
    pub statistics: Statistics,
    /// Detected ISO 639-1 language code.
    pub language: String,
    /// Token occurrences removed by the stop-word filter.
    pub stopwords_used: usize,
}

/// Runs the full analysis pipeline over already-extracted page text.
pub fn analyze(text: &str, options: &AnalysisOptions) -> AnalysisReport {
    let language = language::detect(text);
    let stop_words = stopwords::resolve(language, &options.custom_stop_words);
    let cleaned = tokenize::clean_and_tokenize(text, &stop_words);

    let word_frequency = frequency::count_words(&cleaned.tokens, options.num_results);
    let statistics = frequency::compute_statistics(&cleaned.tokens);

    AnalysisReport {
        word_frequency,
        statistics,
        language: language.to_string(),
        stopwords_used: cleaned.stopwords_removed,
    }
}
