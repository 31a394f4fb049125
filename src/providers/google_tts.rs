use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{SpeechSynthesizer, VoiceConfig, error_for_request, error_for_status};

/// Default Cloud Text-to-Speech v1 endpoint
pub const DEFAULT_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Google Cloud Text-to-Speech (v1 REST) client
pub struct GoogleTts {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (defaults to the public API when empty)
    endpoint: String,
}

/// Synthesis request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest<'a> {
    /// Text to speak
    pub input: SynthesisInput<'a>,

    /// Voice selection
    pub voice: VoiceSelection<'a>,

    /// Output encoding
    pub audio_config: AudioConfig,
}

/// Text input
#[derive(Debug, Serialize)]
pub struct SynthesisInput<'a> {
    pub text: &'a str,
}

/// Voice selection parameters
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection<'a> {
    pub language_code: &'a str,
    pub name: &'a str,
}

/// Audio output parameters
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: &'static str,
}

/// Synthesis response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    /// Base64-encoded audio
    pub audio_content: String,
}

impl<'a> SynthesizeRequest<'a> {
    /// MP3 request for `text` spoken by `voice`
    pub fn mp3(text: &'a str, voice: &'a VoiceConfig) -> Self {
        Self {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: &voice.name,
            },
            audio_config: AudioConfig { audio_encoding: "MP3" },
        }
    }
}

impl GoogleTts {
    /// Create a new client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self) -> &str {
        if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        }
    }

    /// Decode the audio payload of a response
    pub fn decode_audio(response: &SynthesizeResponse) -> Result<Bytes, ProviderError> {
        STANDARD
            .decode(response.audio_content.as_bytes())
            .map(Bytes::from)
            .map_err(|e| ProviderError::ParseError(format!("Invalid audio content: {}", e)))
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, text: &str, voice: &VoiceConfig) -> Result<Bytes, ProviderError> {
        let request = SynthesizeRequest::mp3(text, voice);

        let response = self
            .client
            .post(self.api_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(error_for_request)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Text-to-speech API error ({}): {}", status, error_text);
            return Err(error_for_status(status, error_text));
        }

        let body = response
            .json::<SynthesizeResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::decode_audio(&body)
    }
}

impl std::fmt::Debug for GoogleTts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTts")
            .field("endpoint", &self.api_url())
            .finish_non_exhaustive()
    }
}
