use reqwest::Client;
use std::time::Instant;
use wordscope_server::api::create_router;
use wordscope_server::api::handlers::AppState;

const PAGE_HTML: &str = r#"<html>
<head>
  <title>Safari Notes</title>
  <meta charset="utf-8">
  <style>body { margin: 0; }</style>
</head>
<body>
  <header>Site navigation menu</header>
  <main>
    <p>The zebra wandered across the open plains while the walrus rested beside
    the water. Every morning the zebra searched for fresh grass, and every
    evening the walrus watched the tide roll in. Both the zebra and the walrus
    enjoyed the quiet landscape around them.</p>
    <p>Visit https://example.com/safari or www.safari-notes.org for 42 more stories.</p>
  </main>
  <script>var tracker = "analytics";</script>
  <footer>copyright boilerplate</footer>
</body>
</html>"#;

const EMPTY_HTML: &str = "<html><body></body></html>";

async fn spawn_app() -> String {
    let http = Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client");
    let state = AppState {
        http,
        start_time: Instant::now(),
    };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Stand-in for the remote site: serves fixed pages on an ephemeral port.
async fn spawn_pages() -> String {
    use axum::response::Html;
    use axum::routing::get;

    let app = axum::Router::new()
        .route("/", get(|| async { Html(PAGE_HTML) }))
        .route("/empty", get(|| async { Html(EMPTY_HTML) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client() -> Client {
    Client::new()
}

async fn post_analyze(base_url: &str, body: serde_json::Value) -> reqwest::Response {
    client()
        .post(format!("{}/api/analyze", base_url))
        .json(&body)
        .send()
        .await
        .expect("Failed to send analyze request")
}

#[tokio::test]
async fn health_returns_ok() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_endpoint_responds() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/api/test", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Backend is working!");
}

#[tokio::test]
async fn supported_languages_lists_whitelist() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/api/supported-languages", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    let languages = body["data"]["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 14);
    assert!(languages.iter().any(|l| l == "en"));
    assert_eq!(body["data"]["current_default"], "english");
}

#[tokio::test]
async fn analyze_missing_url_returns_400() {
    let base_url = spawn_app().await;

    let resp = post_analyze(&base_url, serde_json::json!({})).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn analyze_empty_url_returns_400() {
    let base_url = spawn_app().await;

    let resp = post_analyze(&base_url, serde_json::json!({ "url": "" })).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn analyze_negative_num_results_returns_400() {
    let base_url = spawn_app().await;

    let resp = post_analyze(
        &base_url,
        serde_json::json!({ "url": "http://127.0.0.1:1/", "numResults": -3 }),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("numResults"));
}

#[tokio::test]
async fn analyze_unreachable_url_returns_400() {
    let base_url = spawn_app().await;

    let resp = post_analyze(&base_url, serde_json::json!({ "url": "http://127.0.0.1:1/" })).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch URL:"));
}

#[tokio::test]
async fn analyze_non_http_scheme_returns_400() {
    let base_url = spawn_app().await;

    let resp = post_analyze(&base_url, serde_json::json!({ "url": "ftp://example.com/" })).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch URL:"));
}

#[tokio::test]
async fn analyze_non_2xx_status_returns_400() {
    let base_url = spawn_app().await;
    let pages = spawn_pages().await;

    let resp = post_analyze(
        &base_url,
        serde_json::json!({ "url": format!("{}/missing", pages) }),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch URL:"));
}

#[tokio::test]
async fn analyze_page_end_to_end() {
    let base_url = spawn_app().await;
    let pages = spawn_pages().await;

    let resp = post_analyze(&base_url, serde_json::json!({ "url": format!("{}/", pages) })).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["language"], "en");

    let freq = data["word_frequency"].as_object().unwrap();
    assert_eq!(freq["zebra"], 3);
    assert_eq!(freq["walrus"], 3);
    // Stop words never appear as keys.
    assert!(!freq.contains_key("the"));
    assert!(!freq.contains_key("and"));
    // Script, header, and footer content is stripped before analysis.
    assert!(!freq.contains_key("tracker"));
    assert!(!freq.contains_key("navigation"));
    assert!(!freq.contains_key("copyright"));
    // URLs and digit runs are removed by the cleaner.
    assert!(freq.keys().all(|k| !k.contains("example")));
    assert!(freq.keys().all(|k| !k.contains("42")));

    let stats = &data["statistics"];
    let total = stats["total_words"].as_u64().unwrap();
    let unique = stats["unique_words"].as_u64().unwrap();
    assert!(total >= unique);
    assert!(unique >= freq.len() as u64);
    assert!(stats["avg_word_length"].as_f64().unwrap() > 0.0);

    assert!(data["stopwords_used"].as_u64().unwrap() > 0);
    assert!(data["csv_export"]
        .as_str()
        .unwrap()
        .starts_with("Word,Frequency"));
}

#[tokio::test]
async fn analyze_custom_stop_words_excluded() {
    let base_url = spawn_app().await;
    let pages = spawn_pages().await;

    let resp = post_analyze(
        &base_url,
        serde_json::json!({ "url": format!("{}/", pages), "stopWords": ["zebra"] }),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let freq = body["data"]["word_frequency"].as_object().unwrap();
    assert!(!freq.contains_key("zebra"));
    assert_eq!(freq["walrus"], 3);
}

#[tokio::test]
async fn analyze_num_results_limits_entries() {
    let base_url = spawn_app().await;
    let pages = spawn_pages().await;

    let resp = post_analyze(
        &base_url,
        serde_json::json!({ "url": format!("{}/", pages), "numResults": 2 }),
    )
    .await;
    let body: serde_json::Value = resp.json().await.unwrap();
    let freq = body["data"]["word_frequency"].as_object().unwrap();
    assert!(freq.len() <= 2);

    let resp = post_analyze(
        &base_url,
        serde_json::json!({ "url": format!("{}/", pages), "numResults": 0 }),
    )
    .await;
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["data"]["word_frequency"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn analyze_empty_page() {
    let base_url = spawn_app().await;
    let pages = spawn_pages().await;

    let resp = post_analyze(
        &base_url,
        serde_json::json!({ "url": format!("{}/empty", pages) }),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let data = &body["data"];
    assert!(data["word_frequency"].as_object().unwrap().is_empty());
    assert_eq!(data["statistics"]["total_words"], 0);
    assert_eq!(data["statistics"]["unique_words"], 0);
    assert_eq!(data["statistics"]["avg_word_length"], 0.0);
    assert_eq!(data["stopwords_used"], 0);
}

#[tokio::test]
async fn csv_export_matches_json_payload() {
    let base_url = spawn_app().await;
    let pages = spawn_pages().await;

    let resp = post_analyze(&base_url, serde_json::json!({ "url": format!("{}/", pages) })).await;
    let body: serde_json::Value = resp.json().await.unwrap();
    let data = &body["data"];
    let freq = data["word_frequency"].as_object().unwrap();
    let csv_export = data["csv_export"].as_str().unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_export.as_bytes());

    let mut csv_pairs = std::collections::HashMap::new();
    let mut in_stats = false;
    let mut total_words = None;
    let mut language = None;
    for record in reader.records() {
        let record = record.unwrap();
        match record.get(0) {
            Some("Word") | Some("") | None => {}
            Some("Statistics") => in_stats = true,
            Some("Total Words") => {
                total_words = Some(record.get(1).unwrap().parse::<u64>().unwrap());
            }
            Some("Language") => language = Some(record.get(1).unwrap().to_string()),
            Some(field) if !in_stats => {
                let count: u64 = record.get(1).unwrap().parse().unwrap();
                csv_pairs.insert(field.to_string(), count);
            }
            _ => {}
        }
    }

    assert_eq!(csv_pairs.len(), freq.len());
    for (word, count) in freq {
        assert_eq!(csv_pairs[word], count.as_u64().unwrap());
    }
    assert_eq!(
        total_words,
        Some(data["statistics"]["total_words"].as_u64().unwrap())
    );
    assert_eq!(language.as_deref(), Some("EN"));
}

#[tokio::test]
async fn test_request_id_header() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let request_id = resp
        .headers()
        .get("x-request-id")
        .expect("Missing X-Request-Id header")
        .to_str()
        .unwrap();
    uuid::Uuid::parse_str(request_id).expect("X-Request-Id is not a valid UUID");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let base_url = spawn_app().await;

    let resp = client()
        .get(format!("{}/api/test", base_url))
        .header("Origin", "http://frontend.example")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
