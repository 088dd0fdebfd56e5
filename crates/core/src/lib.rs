//! # wordscope-core
//!
//! Text-analysis pipeline for web-page word-frequency reports: markup
//! stripping, language detection, stop-word filtering, tokenization,
//! frequency counting, summary statistics, and CSV export.
//!
//! This is the core library crate with zero async dependencies — the HTTP
//! layer and the outbound page fetcher live in `wordscope-server`.

/// Pipeline orchestration: `analyze` plus its option and report types.
pub mod analysis;
/// Global configuration constants: limits, defaults, and tuning parameters.
pub mod config;
/// CSV serialization of analysis reports.
pub mod export;
/// HTML markup stripping and visible-text extraction.
pub mod extract;
/// Word-frequency counting and summary statistics.
pub mod frequency;
/// Statistical language identification with whitelist fallback.
pub mod language;
/// Built-in and caller-supplied stop-word resolution.
pub mod stopwords;
/// Text cleaning and tokenization.
pub mod tokenize;
