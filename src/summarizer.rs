//! The summarization pipeline: validate, extract, delegate.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::error;

use crate::clients::{
    ClaudeClient, GeminiClient, GenerateTransport, HttpTransport, OpenAiClient, SummaryBackend,
};
use crate::config::AppConfig;
use crate::errors::SummarizeError;
use crate::extract::ExtractionDispatcher;
use crate::models::{DocumentFormat, Provider, RawContent, SummarizeRequest};

/// Document summarization entry point.
///
/// Holds the immutable configuration snapshot and the transport used for
/// provider calls. Invocations are independent; a single instance can
/// serve concurrent callers.
pub struct Summarizer {
    config: AppConfig,
    transport: Arc<dyn GenerateTransport>,
    extractor: ExtractionDispatcher,
}

impl Summarizer {
    /// Creates a summarizer with the production HTTP transport.
    pub fn new(config: AppConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Creates a summarizer with an injected transport, for deterministic
    /// tests.
    pub fn with_transport(config: AppConfig, transport: Arc<dyn GenerateTransport>) -> Self {
        let extractor = ExtractionDispatcher::new(config.doc_converter.clone());
        Self {
            config,
            transport,
            extractor,
        }
    }

    /// Summarizes `content` with the chosen provider.
    ///
    /// `format` is only meaningful for binary content; text passes
    /// through extraction untouched.
    pub async fn summarize(
        &self,
        content: RawContent,
        provider: Provider,
        format: DocumentFormat,
    ) -> Result<String, SummarizeError> {
        if content.is_empty() {
            return Err(SummarizeError::EmptyContent);
        }

        let text = self.extractor.extract(&content, format).await?;

        if text.trim().is_empty() {
            error!(format = %format, "Extraction produced no usable text");
            return Err(SummarizeError::NoExtractableText);
        }

        self.backend_for(provider).summarize(&text).await
    }

    /// Summarizes a typed request.
    pub async fn handle(&self, request: SummarizeRequest) -> Result<String, SummarizeError> {
        self.summarize(request.content, request.provider, request.format)
            .await
    }

    fn backend_for(&self, provider: Provider) -> Box<dyn SummaryBackend> {
        match provider {
            Provider::Gemini => Box::new(GeminiClient::new(
                self.config.gemini_api_key.clone(),
                self.config.gemini_model.clone(),
                self.config.api_base_url.clone(),
                Arc::clone(&self.transport),
            )),
            Provider::OpenAi => Box::new(OpenAiClient),
            Provider::Claude => Box::new(ClaudeClient),
        }
    }
}

/// Configuration snapshot for the convenience function, read once per
/// process.
static DEFAULT_SUMMARIZER: Lazy<Summarizer> = Lazy::new(|| Summarizer::new(AppConfig::from_env()));

/// Summarizes document content with the given provider.
///
/// String-typed convenience surface over [`Summarizer::summarize`]:
/// `provider` and `format` are parsed, `format` defaults to `"txt"` and
/// is only consulted for binary content. Configuration comes from the
/// environment, loaded on first use.
pub async fn summarize(
    content: impl Into<RawContent>,
    provider: &str,
    format: Option<&str>,
) -> Result<String, SummarizeError> {
    let content = content.into();
    if content.is_empty() {
        return Err(SummarizeError::EmptyContent);
    }

    let provider: Provider = provider.parse()?;
    let format = match format {
        Some(raw) => raw.parse()?,
        None => DocumentFormat::Txt,
    };

    DEFAULT_SUMMARIZER.summarize(content, provider, format).await
}
