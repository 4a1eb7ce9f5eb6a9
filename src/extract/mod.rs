//! Content-type dispatch and text extraction.
//!
//! Normalizes heterogeneous document formats into plain text before the
//! summarization client sees them.

pub mod pdf;
pub mod word;

use tracing::{debug, error};

use crate::errors::SummarizeError;
use crate::models::{DocumentFormat, RawContent};
use self::word::{WordExtractOptions, WordExtractor};

pub use self::word::{DOC_MIME, DOCX_MIME};

/// Number of characters of extracted text included in debug logs.
const PREVIEW_CHARS: usize = 500;

/// Routes content to the extraction capability for its declared format.
#[derive(Debug, Clone)]
pub struct ExtractionDispatcher {
    word: WordExtractor,
}

impl ExtractionDispatcher {
    pub fn new(doc_converter: impl Into<String>) -> Self {
        Self {
            word: WordExtractor::new(doc_converter),
        }
    }

    /// Produces plain text from the given content.
    ///
    /// Text content passes through untouched; binary content is decoded
    /// according to `format`. On success this always returns a string —
    /// whitespace-only results are the caller's concern.
    pub async fn extract(
        &self,
        content: &RawContent,
        format: DocumentFormat,
    ) -> Result<String, SummarizeError> {
        let text = match content {
            RawContent::Text(text) => text.clone(),
            RawContent::Bytes(bytes) => {
                let result = match format {
                    DocumentFormat::Txt => Ok(String::from_utf8_lossy(bytes).into_owned()),
                    DocumentFormat::Pdf => pdf::extract_text(bytes).await,
                    DocumentFormat::Doc | DocumentFormat::Docx => {
                        self.word
                            .extract(
                                format.mime_type(),
                                bytes,
                                WordExtractOptions {
                                    preserve_line_breaks: true,
                                },
                            )
                            .await
                    }
                };

                match result {
                    Ok(text) => text,
                    Err(e) => {
                        error!(format = %format, error = %e, "Text extraction failed");
                        return Err(SummarizeError::ExtractionFailed {
                            format: format.to_string(),
                            message: e.to_string(),
                        });
                    }
                }
            }
        };

        log_preview(&text);
        Ok(text)
    }
}

fn log_preview(text: &str) {
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        debug!(preview = %preview, "Extracted text for summarization (preview truncated)");
    } else {
        debug!(preview = %preview, "Extracted text for summarization");
    }
}
