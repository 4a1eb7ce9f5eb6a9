//! OpenAI summarization backend.
//!
//! Recognized but not wired up; calls fail before any network activity.

use async_trait::async_trait;

use super::SummaryBackend;
use crate::errors::SummarizeError;
use crate::models::Provider;

pub struct OpenAiClient;

#[async_trait]
impl SummaryBackend for OpenAiClient {
    async fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
        Err(SummarizeError::NotImplemented(Provider::OpenAi))
    }
}
