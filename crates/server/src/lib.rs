//! wordscope-server — HTTP API for wordscope.
//!
//! Provides the REST endpoint for page analysis and the outbound page
//! fetcher. The text-analysis pipeline lives in `wordscope-core`.

/// REST API layer: Axum router, HTTP handlers, models, errors.
pub mod api;
/// Outbound page fetching with timeout and size bounds.
pub mod fetch;
