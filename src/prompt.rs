//! Prompt construction for summarization requests.

use tracing::warn;

/// Fixed instruction prepended to every summarization prompt.
pub const SUMMARY_INSTRUCTION: &str = "Please provide a concise summary of the following text:";

/// Maximum number of characters of document text included in a prompt.
/// Keeps the request comfortably inside the model's context window.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Caps `text` at `MAX_TEXT_LENGTH` characters.
///
/// Truncation is an observable side effect, not an error: a warning with
/// the original length is logged and the capped text is used as-is.
pub fn truncate_for_prompt(text: &str) -> &str {
    match text.char_indices().nth(MAX_TEXT_LENGTH) {
        Some((boundary, _)) => {
            warn!(
                original_length = text.chars().count(),
                "Text truncated for summarization"
            );
            &text[..boundary]
        }
        None => text,
    }
}

/// Builds the single-turn prompt sent to the provider.
pub fn build_prompt(text: &str) -> String {
    format!("{SUMMARY_INSTRUCTION}\n\n{}", truncate_for_prompt(text))
}
