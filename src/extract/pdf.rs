//! PDF text extraction.
//!
//! pdf-extract walks the text layer; parsing is CPU-bound so it runs on
//! the blocking pool.

use anyhow::{Result, anyhow};

/// Extracts the concatenated text layer from a PDF buffer.
pub async fn extract_text(bytes: &[u8]) -> Result<String> {
    let bytes = bytes.to_vec();
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| anyhow!("extraction task failed: {e}"))?
        .map_err(|e| anyhow!("{e}"))
}
