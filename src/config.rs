use std::env;

/// Model used for summarization unless overridden by `GEMINI_MODEL`.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Host of the Gemini generation endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// External converter used for legacy .doc files.
pub const DEFAULT_DOC_CONVERTER: &str = "antiword";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub api_base_url: String,
    pub doc_converter: String,
}

impl AppConfig {
    /// Reads configuration from the environment.
    ///
    /// A missing `GEMINI_API_KEY` is not an error here: the gemini
    /// provider reports `MissingCredential` at call time instead of the
    /// process failing at startup.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            api_base_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            doc_converter: env::var("DOC_CONVERTER")
                .unwrap_or_else(|_| DEFAULT_DOC_CONVERTER.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            doc_converter: DEFAULT_DOC_CONVERTER.to_string(),
        }
    }
}
