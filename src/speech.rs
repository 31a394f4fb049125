/*!
 * Pronunciation audio for Japanese and Korean text.
 */

use std::sync::Arc;

use bytes::Bytes;
use log::{debug, error};

use crate::app_config::VoicesConfig;
use crate::errors::SpeechError;
use crate::language_utils::Language;
use crate::providers::SpeechSynthesizer;

/// Validates pronounce requests and forwards them to the speech provider
#[derive(Debug, Clone)]
pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    voices: VoicesConfig,
}

impl SpeechService {
    /// Create a service using the configured voices
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, voices: VoicesConfig) -> Self {
        Self { synthesizer, voices }
    }

    /// Synthesize `text` in `language` (`ja` or `ko`) as MP3 audio
    pub async fn pronounce(&self, text: &str, language: &str) -> Result<Bytes, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::InvalidInput("text is empty".to_string()));
        }

        let language = Language::from_code(language)
            .ok_or_else(|| SpeechError::InvalidInput("language is empty".to_string()))?;
        let voice = self
            .voices
            .voice_for(&language)
            .ok_or_else(|| SpeechError::InvalidInput(format!("pronunciation is not available for '{}'", language)))?;

        debug!("Synthesizing {} chars with voice {}", text.chars().count(), voice.name);

        let audio = self
            .synthesizer
            .synthesize(text, voice)
            .await
            .inspect_err(|e| error!("TTS Error: {}", e))?;

        Ok(audio)
    }
}
