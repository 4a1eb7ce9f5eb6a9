//! Word-document extraction.
//!
//! DOCX archives are unpacked in-process. Legacy DOC files go through an
//! external converter, since the OLE2 binary format has no ecosystem
//! parser worth depending on; the child process is awaited so callers see
//! one suspend point either way.

use std::io::{Cursor, Read, Write};
use std::process::Stdio;

use anyhow::{Context, Result, anyhow, bail};
use quick_xml::Reader;
use quick_xml::events::Event;
use tokio::process::Command;
use tracing::debug;

/// MIME type for legacy Word documents.
pub const DOC_MIME: &str = "application/msword";

/// MIME type for Office Open XML word-processing documents.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Options honored by the word extraction capability.
#[derive(Debug, Clone, Copy)]
pub struct WordExtractOptions {
    pub preserve_line_breaks: bool,
}

impl Default for WordExtractOptions {
    fn default() -> Self {
        Self {
            preserve_line_breaks: true,
        }
    }
}

/// Extraction capability for Word documents, selected by MIME type.
#[derive(Debug, Clone)]
pub struct WordExtractor {
    doc_converter: String,
}

impl WordExtractor {
    pub fn new(doc_converter: impl Into<String>) -> Self {
        Self {
            doc_converter: doc_converter.into(),
        }
    }

    /// Extracts plain text from a Word document buffer.
    ///
    /// The MIME type selects the strategy; an unrecognized MIME type is
    /// an error rather than a guess.
    pub async fn extract(
        &self,
        mime: &str,
        bytes: &[u8],
        options: WordExtractOptions,
    ) -> Result<String> {
        match mime {
            DOCX_MIME => extract_docx(bytes, options),
            DOC_MIME => self.convert_doc(bytes).await,
            other => bail!("unsupported word-processing MIME type: {other}"),
        }
    }

    /// Converts a legacy .doc by handing it to the configured external
    /// converter and capturing its stdout.
    async fn convert_doc(&self, bytes: &[u8]) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix("docsum-")
            .suffix(".doc")
            .tempfile()
            .context("failed to create temp file for doc conversion")?;
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .context("failed to write doc contents")?;

        let output = Command::new(&self.doc_converter)
            .arg(file.path())
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("failed to run doc converter '{}'", self.doc_converter))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "doc converter '{}' exited with {}: {}",
                self.doc_converter,
                output.status,
                stderr.trim()
            );
        }

        debug!(
            converter = %self.doc_converter,
            bytes = output.stdout.len(),
            "doc conversion complete"
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Pulls the text runs out of `word/document.xml`.
///
/// Collects `w:t` runs; paragraph ends and explicit `w:br` elements
/// become newlines when line breaks are preserved, spaces otherwise.
fn extract_docx(bytes: &[u8], options: WordExtractOptions) -> Result<String> {
    let cursor = Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor).context("not a valid docx archive")?;
    let mut document = archive
        .by_name("word/document.xml")
        .context("docx archive is missing word/document.xml")?;
    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .context("failed to read word/document.xml")?;

    let break_char = if options.preserve_line_breaks { '\n' } else { ' ' };

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push(break_char),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push(break_char),
            Ok(Event::Text(e)) if in_text_run => {
                let run = e.unescape().context("invalid text run in document.xml")?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(anyhow!("malformed document.xml: {e}")),
        }
    }

    Ok(text)
}
