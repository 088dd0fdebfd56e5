//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling
//! via Axum. Field names follow the front-end contract (`numResults`,
//! `stopWords`, `csv_export`).

use serde::{Deserialize, Serialize};
use wordscope_core::analysis::AnalysisReport;

/// Request body for `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Page to fetch and analyze. Required; validated in the handler so a
    /// missing field produces the `{success: false}` envelope rather than a
    /// deserialization rejection.
    pub url: Option<String>,
    /// Top-N cutoff. Negative values are rejected with a 400.
    #[serde(rename = "numResults")]
    pub num_results: Option<i64>,
    /// Custom stop words unioned with the built-in list.
    #[serde(default, rename = "stopWords")]
    pub stop_words: Vec<String>,
}

/// Success envelope for `POST /api/analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: AnalysisData,
}

/// Payload of a successful analysis: the report plus its CSV rendering.
#[derive(Debug, Serialize)]
pub struct AnalysisData {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub csv_export: String,
}

/// Response body for `GET /api/test`.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: String,
}

/// Success envelope for `GET /api/supported-languages`.
#[derive(Debug, Serialize)]
pub struct SupportedLanguagesResponse {
    pub success: bool,
    pub data: SupportedLanguagesData,
}

/// Payload listing the ISO codes with built-in stop-word lists.
#[derive(Debug, Serialize)]
pub struct SupportedLanguagesData {
    pub languages: Vec<&'static str>,
    pub current_default: &'static str,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
