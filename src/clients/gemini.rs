//! Gemini generateContent client.
//!
//! Builds the single-turn prompt, POSTs it to the versioned REST endpoint
//! and digs the summary out of the candidate list.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::error;

use super::{GenerateTransport, SummaryBackend};
use crate::errors::SummarizeError;
use crate::models::Provider;
use crate::prompt;

// Decoding configuration for summarization calls. Low randomness keeps
// summaries stable across runs.
const TEMPERATURE: f64 = 0.4;
const TOP_P: f64 = 0.9;
const TOP_K: u32 = 40;
const MAX_OUTPUT_TOKENS: u32 = 300;

/// Client for the Gemini generation endpoint.
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    transport: Arc<dyn GenerateTransport>,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        transport: Arc<dyn GenerateTransport>,
    ) -> Self {
        Self {
            api_key,
            model: model.into(),
            base_url: base_url.into(),
            transport,
        }
    }

    /// The credential rides as a query parameter, so this value must never
    /// be logged.
    fn endpoint(&self, key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            key
        )
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "topP": TOP_P,
                "topK": TOP_K,
                "maxOutputTokens": MAX_OUTPUT_TOKENS
            }
        })
    }

    /// The response contract is the exact nested path
    /// `candidates[0].content.parts[0].text`; any missing link is an
    /// unexpected shape.
    fn summary_from_response(body: &str) -> Result<String, SummarizeError> {
        let value: Value =
            serde_json::from_str(body).map_err(|_| SummarizeError::UnexpectedResponseShape)?;

        value
            .get("candidates")
            .and_then(Value::as_array)
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array)
            .and_then(|parts| parts.first())
            .and_then(|part| part.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(SummarizeError::UnexpectedResponseShape)
    }
}

#[async_trait]
impl SummaryBackend for GeminiClient {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        if text.is_empty() {
            return Err(SummarizeError::EmptyContent);
        }

        let Some(key) = self.api_key.as_deref() else {
            return Err(SummarizeError::MissingCredential(Provider::Gemini));
        };

        let prompt = prompt::build_prompt(text);

        #[cfg(feature = "debug-logs")]
        tracing::info!("Using Gemini prompt:\n{prompt}");

        let body = Self::request_body(&prompt);
        let response = self.transport.post_json(&self.endpoint(key), &body).await?;

        if !response.is_success() {
            error!(
                status = response.status,
                "Gemini API returned an error response"
            );
            return Err(SummarizeError::RemoteApi {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }

        Self::summary_from_response(&response.body)
    }
}
