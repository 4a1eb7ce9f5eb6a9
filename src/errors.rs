use thiserror::Error;

use crate::models::Provider;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Content to summarize cannot be empty")]
    EmptyContent,

    #[error("Invalid content type. Must be text or bytes")]
    InvalidContentType,

    #[error("Unsupported file type for summarization: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed for {format}: {message}")]
    ExtractionFailed { format: String, message: String },

    #[error("No extractable text found in the document")]
    NoExtractableText,

    #[error("{} API key is not configured", .0.display_name())]
    MissingCredential(Provider),

    #[error("Invalid AI provider: {0}. Supported providers are 'gemini', 'openai', 'claude'")]
    InvalidProvider(String),

    #[error("{} integration is not yet implemented", .0.display_name())]
    NotImplemented(Provider),

    #[error("Gemini API error: {status} {status_text} - {body}")]
    RemoteApi {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Unexpected response structure from Gemini API")]
    UnexpectedResponseShape,

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Http(error.to_string())
    }
}
