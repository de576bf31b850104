use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use ticket_triage::{
    Result,
    analyzer::TicketAnalyzer,
    config::{Config, SearchConfig},
    search::{SearchProvider, WebSearcher},
    server::{self, handlers::AppState},
};
use tempfile::TempDir;
use tokio::fs;

/// Create a web searcher over the given provider with default settings
pub fn create_searcher(provider: impl SearchProvider + 'static) -> WebSearcher {
    WebSearcher::new(Arc::new(provider), &SearchConfig::default())
}

/// Create the full application router over the given provider
pub fn create_test_app(provider: impl SearchProvider + 'static) -> Router {
    let analyzer = TicketAnalyzer::new(create_searcher(provider));
    server::router(AppState::new(analyzer))
}

/// Build a JSON POST request
pub fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response<axum::body::Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Default configuration for comparisons
pub fn create_test_config() -> Config {
    Config::default()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 9090
  logs:
    level: "debug"

search:
  base_url: "http://127.0.0.1:4000"
  region: "us-en"
  max_results: 5
  timeout_secs: 2
  fallback_url: "https://search.example.com/find"
"#;

/// Configuration that only overrides the port
pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 8123
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;

/// Configuration rejected by validation
pub const ZERO_RESULTS_CONFIG_YAML: &str = r#"
search:
  max_results: 0
"#;
