//! Outbound page fetching.
//!
//! A single bounded GET per analysis request: the URL must parse with an
//! http/https scheme, non-2xx statuses are errors, and the response body is
//! capped. No retries — a failed fetch fails the request.

use url::Url;
use wordscope_core::config::MAX_PAGE_BYTES;

/// Failures while fetching the target page.
///
/// Every variant maps to a request-level 400 at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL did not parse or used a non-HTTP scheme.
    #[error("invalid URL '{0}'")]
    InvalidUrl(String),
    /// Transport failure, timeout, or non-2xx response status.
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    /// The response body exceeded [`MAX_PAGE_BYTES`].
    #[error("page exceeds {MAX_PAGE_BYTES} bytes")]
    TooLarge,
}

/// Fetches `url` and returns the response body as text.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }

    let response = client.get(parsed).send().await?.error_for_status()?;

    if let Some(length) = response.content_length() {
        if length as usize > MAX_PAGE_BYTES {
            return Err(FetchError::TooLarge);
        }
    }

    let body = response.text().await?;
    if body.len() > MAX_PAGE_BYTES {
        return Err(FetchError::TooLarge);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> reqwest::Client {
        reqwest::Client::new()
    }

    #[tokio::test]
    async fn test_rejects_unparseable_url() {
        let err = fetch_page(&client(), "not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_rejects_non_http_scheme() {
        let err = fetch_page(&client(), "ftp://example.com/file")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        // Port 1 is never listening.
        let err = fetch_page(&client(), "http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
