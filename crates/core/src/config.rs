//! Global configuration constants for wordscope.
//!
//! All tuning parameters, input validation limits, and server defaults are
//! defined here. These are compile-time constants; runtime configuration is
//! handled via CLI arguments in `main.rs`.

/// Default number of top-frequency entries returned per analysis.
pub const DEFAULT_NUM_RESULTS: usize = 10;

/// Language code assumed when detection fails or the detected language has
/// no built-in stop-word list.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Minimum token length in characters. Shorter tokens are dropped by the
/// cleaner, after stop-word filtering.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Timeout for the outbound page fetch, in seconds. The fetch is a single
/// attempt — there is no retry policy.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Maximum fetched page size in bytes (5 MB). Larger pages are rejected
/// before analysis.
pub const MAX_PAGE_BYTES: usize = 5 * 1024 * 1024;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Per-request timeout in seconds.
///
/// Must exceed [`FETCH_TIMEOUT_SECS`] so the fetcher fails first and the
/// client receives the fetch error rather than a bare timeout.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP request body size in bytes (64 KB). Analysis requests carry
/// only a URL and options.
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 256;
