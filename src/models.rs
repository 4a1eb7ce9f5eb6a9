//! Request types for the summarization surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SummarizeError;

/// Document content accepted by the summarization surface: plain text or
/// a binary file buffer.
#[derive(Debug, Clone)]
pub enum RawContent {
    Text(String),
    Bytes(Vec<u8>),
}

impl RawContent {
    pub fn is_empty(&self) -> bool {
        match self {
            RawContent::Text(text) => text.is_empty(),
            RawContent::Bytes(bytes) => bytes.is_empty(),
        }
    }

    /// Builds content from a loose JSON value: a string is text, an array
    /// of byte values is a binary buffer. Anything else is rejected.
    pub fn from_json(value: &Value) -> Result<Self, SummarizeError> {
        match value {
            Value::String(text) => Ok(RawContent::Text(text.clone())),
            Value::Array(items) => {
                let mut bytes = Vec::with_capacity(items.len());
                for item in items {
                    let byte = item
                        .as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or(SummarizeError::InvalidContentType)?;
                    bytes.push(byte);
                }
                Ok(RawContent::Bytes(bytes))
            }
            _ => Err(SummarizeError::InvalidContentType),
        }
    }
}

impl From<String> for RawContent {
    fn from(text: String) -> Self {
        RawContent::Text(text)
    }
}

impl From<&str> for RawContent {
    fn from(text: &str) -> Self {
        RawContent::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RawContent {
    fn from(bytes: Vec<u8>) -> Self {
        RawContent::Bytes(bytes)
    }
}

impl From<&[u8]> for RawContent {
    fn from(bytes: &[u8]) -> Self {
        RawContent::Bytes(bytes.to_vec())
    }
}

/// Declared format of a binary document buffer. Ignored for text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Txt,
    Pdf,
    Doc,
    Docx,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Txt => "txt",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Doc => "doc",
            DocumentFormat::Docx => "docx",
        }
    }

    /// MIME type handed to the word-document extraction capability.
    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Txt => "text/plain",
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Doc => "application/msword",
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = SummarizeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "txt" => Ok(DocumentFormat::Txt),
            "pdf" => Ok(DocumentFormat::Pdf),
            "doc" => Ok(DocumentFormat::Doc),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(SummarizeError::UnsupportedFormat(raw.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The remote AI service asked to perform summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    OpenAi,
    Claude,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
            Provider::Claude => "claude",
        }
    }

    /// Human-readable name used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::OpenAi => "OpenAI",
            Provider::Claude => "Claude",
        }
    }
}

impl FromStr for Provider {
    type Err = SummarizeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            "claude" => Ok(Provider::Claude),
            _ => Err(SummarizeError::InvalidProvider(raw.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-typed summarization request.
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    pub content: RawContent,
    pub provider: Provider,
    pub format: DocumentFormat,
}

impl SummarizeRequest {
    /// Parses a request from a loose JSON object, for callers that hand
    /// requests across a JSON boundary. `format` defaults to `txt`.
    pub fn from_json(value: &Value) -> Result<Self, SummarizeError> {
        let content = match value.get("content") {
            Some(raw) => RawContent::from_json(raw)?,
            None => return Err(SummarizeError::EmptyContent),
        };

        let provider = value
            .get("provider")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .parse()?;

        let format = match value.get("format").and_then(Value::as_str) {
            Some(raw) => raw.parse()?,
            None => DocumentFormat::Txt,
        };

        Ok(SummarizeRequest {
            content,
            provider,
            format,
        })
    }
}
