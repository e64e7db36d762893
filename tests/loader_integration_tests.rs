use daneo::core::words::{LoadError, load_words};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Mounts `body` at `/words.json` and returns the full URL.
async fn serve_words(server: &MockServer, status: u16, body: &str) -> String {
    Mock::given(method("GET"))
        .and(path("/words.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
    format!("{}/words.json", server.uri())
}

// ============================================================================
// HTTP Source Tests
// ============================================================================

#[tokio::test]
async fn test_load_over_http_succeeds() {
    let server = MockServer::start().await;
    let url = serve_words(
        &server,
        200,
        r#"{"words":[
            {"korean":"안녕","chinese":"你好","category":"greeting"},
            {"korean":"물","chinese":"水","category":"noun"}
        ]}"#,
    )
    .await;

    let words = load_words(&url).await.unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].term, "안녕");
    assert_eq!(words[1].category, "noun");
}

#[tokio::test]
async fn test_load_reports_http_error_status() {
    let server = MockServer::start().await;
    let url = serve_words(&server, 404, "not found").await;

    let err = load_words(&url).await.unwrap_err();
    match err {
        LoadError::Fetch { detail, .. } => assert!(detail.contains("404")),
        other => panic!("expected Fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_rejects_empty_body() {
    let server = MockServer::start().await;
    let url = serve_words(&server, 200, "   ").await;

    let err = load_words(&url).await.unwrap_err();
    assert!(matches!(err, LoadError::EmptyBody { .. }));
}

#[tokio::test]
async fn test_load_reports_parse_position_for_malformed_json() {
    let server = MockServer::start().await;
    let url = serve_words(&server, 200, "{\"words\": [\n  {broken}\n]}").await;

    let err = load_words(&url).await.unwrap_err();
    match err {
        LoadError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_rejects_document_without_words_array() {
    let server = MockServer::start().await;
    let url = serve_words(&server, 200, r#"{"vocabulary": []}"#).await;

    let err = load_words(&url).await.unwrap_err();
    assert!(matches!(err, LoadError::SchemaMissingField { .. }));
}

#[tokio::test]
async fn test_load_rejects_empty_words_array() {
    let server = MockServer::start().await;
    let url = serve_words(&server, 200, r#"{"words":[]}"#).await;

    let err = load_words(&url).await.unwrap_err();
    assert!(matches!(err, LoadError::SchemaEmptyList { .. }));
}

#[tokio::test]
async fn test_load_error_display_carries_diagnostics() {
    let server = MockServer::start().await;
    let url = serve_words(&server, 200, "{oops").await;

    let err = load_words(&url).await.unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("line 1"));
    assert!(rendered.contains("5 bytes"));
}

// ============================================================================
// File Source Tests
// ============================================================================

#[tokio::test]
async fn test_load_from_file() {
    let dir = std::env::temp_dir().join("daneo-loader-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("words.json");
    std::fs::write(
        &path,
        r#"{"words":[{"korean":"하나","chinese":"一","category":"number"}]}"#,
    )
    .unwrap();

    let words = load_words(path.to_str().unwrap()).await.unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].translation, "一");

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_load_from_missing_file_is_fetch_error() {
    let err = load_words("/definitely/not/here/words.json")
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Fetch { .. }));
}
