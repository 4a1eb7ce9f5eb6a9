//! Exercises the real reqwest transport against a local mock server.

use docsum::models::{DocumentFormat, Provider, RawContent};
use docsum::{AppConfig, SummarizeError, Summarizer};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AppConfig {
    AppConfig {
        gemini_api_key: Some("test-key".to_string()),
        api_base_url: server.uri(),
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_http_transport_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Summary X" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summarizer = Summarizer::new(config_for(&server));
    let summary = summarizer
        .summarize("some text".into(), Provider::Gemini, DocumentFormat::Txt)
        .await
        .unwrap();

    assert_eq!(summary, "Summary X");
}

#[tokio::test]
async fn test_http_transport_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let summarizer = Summarizer::new(config_for(&server));
    let err = summarizer
        .summarize(
            RawContent::Text("some text".into()),
            Provider::Gemini,
            DocumentFormat::Txt,
        )
        .await
        .unwrap_err();

    match err {
        SummarizeError::RemoteApi { status, body, .. } => {
            assert_eq!(status, 500);
            assert!(body.contains("upstream exploded"));
        }
        other => panic!("expected RemoteApi, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_transport_rejects_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let summarizer = Summarizer::new(config_for(&server));
    let err = summarizer
        .summarize("some text".into(), Provider::Gemini, DocumentFormat::Txt)
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizeError::UnexpectedResponseShape));
}
