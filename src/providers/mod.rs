/*!
 * Provider implementations for the external services.
 *
 * This module contains client implementations for:
 * - Google Cloud Translation (text translation)
 * - Google Cloud Text-to-Speech (speech synthesis)
 * - Mock providers used by the test suite
 */

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Machine translation service
///
/// Implementations receive the text exactly as the user typed it and the
/// target language code, and return the translated text.
#[async_trait]
pub trait TextTranslator: Send + Sync + Debug {
    /// Translate `text` into `target_language`
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError>;
}

/// Speech synthesis service
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync + Debug {
    /// Synthesize `text` with `voice`, returning MP3 audio
    async fn synthesize(&self, text: &str, voice: &VoiceConfig) -> Result<Bytes, ProviderError>;
}

/// Voice selection for speech synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// BCP-47 language code (e.g. "ja-JP")
    pub language_code: String,

    /// Provider voice name (e.g. "ja-JP-Neural2-B")
    pub name: String,
}

impl VoiceConfig {
    /// Create a voice configuration
    pub fn new(language_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            name: name.into(),
        }
    }
}

/// Map a non-success HTTP status to a provider error
pub(crate) fn error_for_status(status: StatusCode, body: String) -> ProviderError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(body),
        _ => ProviderError::ApiError {
            status_code: status.as_u16(),
            message: body,
        },
    }
}

/// Map a transport error from reqwest
pub(crate) fn error_for_request(error: reqwest::Error) -> ProviderError {
    if error.is_connect() || error.is_timeout() {
        ProviderError::ConnectionError(error.to_string())
    } else {
        ProviderError::RequestFailed(error.to_string())
    }
}

pub mod google_translate;
pub mod google_tts;
pub mod mock;
