//! docsum - document summarization backed by remote AI providers.
//!
//! Accepts plain text or a binary document buffer (TXT, PDF, DOC, DOCX),
//! normalizes it into a bounded plain-text payload, and delegates to a
//! remote summarization provider.
//!
//! # Architecture
//!
//! The pipeline is two sequential pieces with no shared state:
//! 1. An extraction dispatcher that turns typed content into plain text
//! 2. A summarization client that prompts the selected provider over HTTP
//!
//! Gemini is the implemented provider; OpenAI and Claude are recognized
//! but report `NotImplemented` without touching the network.
//!
//! # Example
//!
//! ```no_run
//! use docsum::models::{DocumentFormat, Provider, RawContent};
//! use docsum::{AppConfig, Summarizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     docsum::setup_logging();
//!
//!     let summarizer = Summarizer::new(AppConfig::from_env());
//!
//!     let summary = summarizer
//!         .summarize(
//!             RawContent::Text("Rust is a systems programming language.".into()),
//!             Provider::Gemini,
//!             DocumentFormat::Txt,
//!         )
//!         .await?;
//!     println!("Summary: {summary}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod clients;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod prompt;
pub mod summarizer;

pub use config::AppConfig;
pub use errors::SummarizeError;
pub use models::{DocumentFormat, Provider, RawContent, SummarizeRequest};
pub use summarizer::{Summarizer, summarize};

/// Configure structured logging for the process.
///
/// Installs a tracing-subscriber fmt layer honoring `RUST_LOG`. Call once
/// at process start; a second call panics because the global subscriber is
/// already set.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
