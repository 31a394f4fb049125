//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

/// Fixed client-facing error messages
pub mod messages {
    pub const MISSING_TRANSLATE_FIELDS: &str = "Missing text or target language.";
    pub const TRANSLATION_FAILED: &str = "Translation service failed.";
    pub const MISSING_PRONOUNCE_FIELDS: &str = "Missing text or language.";
    pub const SPEECH_FAILED: &str = "Text-to-speech service failed.";
}

/// POST /translate body
#[derive(Debug, Default, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate
    #[serde(default)]
    pub text: Option<String>,
    /// Source language code
    #[serde(default)]
    pub input: Option<String>,
    /// Target language code
    #[serde(default)]
    pub target: Option<String>,
}

/// POST /pronounce body
#[derive(Debug, Default, Deserialize)]
pub struct PronounceRequest {
    /// Text to speak
    #[serde(default)]
    pub text: Option<String>,
    /// `ja` or `ko`
    #[serde(default)]
    pub lang: Option<String>,
}

/// GET /status body
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// "ready" or "loading"
    pub status: String,
    /// Whether Japanese romanization is available
    pub analyzer_ready: bool,
    /// Application version
    pub version: String,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
