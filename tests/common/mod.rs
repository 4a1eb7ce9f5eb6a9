//! Shared test doubles.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use docsum::SummarizeError;
use docsum::clients::{ApiResponse, GenerateTransport};
use serde_json::{Value, json};

/// Transport double that records every request and serves one canned
/// response, so provider behavior can be asserted without a network.
pub struct MockTransport {
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, Value)>>,
    response: ApiResponse,
}

impl MockTransport {
    pub fn returning(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            response: ApiResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            },
        }
    }

    /// A transport whose response carries `summary` in the expected
    /// candidate shape.
    pub fn with_summary(summary: &str) -> Self {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": summary }] } }]
        });
        Self::returning(200, "OK", &body.to_string())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(String, Value)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerateTransport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<ApiResponse, SummarizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        Ok(self.response.clone())
    }
}
