//! Remote API clients and the transport they share.

pub mod claude;
pub mod gemini;
pub mod openai;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SummarizeError;

pub use self::claude::ClaudeClient;
pub use self::gemini::GeminiClient;
pub use self::openai::OpenAiClient;

/// Request timeout for generation calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// What the summarization client needs back from a transport.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single-shot JSON POST transport.
///
/// The production implementation wraps reqwest; tests substitute a
/// recording mock so provider behavior can be asserted without a network.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<ApiResponse, SummarizeError>;
}

/// Provider-facing summarization contract.
///
/// One implementation per provider keeps dispatch a data decision instead
/// of a conditional chain.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// reqwest-backed transport used outside of tests.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerateTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<ApiResponse, SummarizeError> {
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("Failed to read response body: {e}"));

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }
}
