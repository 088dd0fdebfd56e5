//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::models::{
    AnalysisData, AnalyzeRequest, AnalyzeResponse, HealthResponse, SupportedLanguagesData,
    SupportedLanguagesResponse, TestResponse,
};
use crate::fetch;
use axum::extract::State;
use axum::Json;
use std::time::Instant;
use wordscope_core::analysis::{self, AnalysisOptions};
use wordscope_core::config;
use wordscope_core::language::SUPPORTED_LANGUAGES;
use wordscope_core::{export, extract};

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    /// Outbound HTTP client, built once with the fetch timeout.
    pub http: reqwest::Client,
    /// Server start time, reported by `/health`.
    pub start_time: Instant,
}

fn validate_url(url: Option<&str>) -> Result<&str, ApiError> {
    match url {
        Some(u) if !u.trim().is_empty() => Ok(u),
        _ => Err(ApiError::BadRequest("URL is required".to_string())),
    }
}

fn validate_num_results(num_results: Option<i64>) -> Result<usize, ApiError> {
    match num_results {
        None => Ok(config::DEFAULT_NUM_RESULTS),
        Some(n) if n >= 0 => Ok(n as usize),
        Some(n) => Err(ApiError::BadRequest(format!(
            "numResults must be non-negative, got {n}"
        ))),
    }
}

/// `POST /api/analyze`
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let url = validate_url(request.url.as_deref())?;
    let num_results = validate_num_results(request.num_results)?;

    let html = fetch::fetch_page(&state.http, url)
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to fetch URL: {e}")))?;

    let text = extract::extract_text(&html);
    let options = AnalysisOptions {
        num_results,
        custom_stop_words: request.stop_words,
    };
    let report = analysis::analyze(&text, &options);

    let csv_export =
        export::to_csv(&report).map_err(|e| ApiError::Internal(format!("Analysis failed: {e}")))?;

    tracing::debug!(
        url,
        language = %report.language,
        total_words = report.statistics.total_words,
        unique_words = report.statistics.unique_words,
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        data: AnalysisData { report, csv_export },
    }))
}

/// `GET /api/test`
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Backend is working!".to_string(),
    })
}

/// `GET /api/supported-languages`
pub async fn supported_languages() -> Json<SupportedLanguagesResponse> {
    Json(SupportedLanguagesResponse {
        success: true,
        data: SupportedLanguagesData {
            languages: SUPPORTED_LANGUAGES.to_vec(),
            current_default: "english",
        },
    })
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
