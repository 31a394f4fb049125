use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{TextTranslator, error_for_request, error_for_status};

/// Default Cloud Translation v2 endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Cloud Translation (v2 REST) client
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (defaults to the public API when empty)
    endpoint: String,
}

/// Translation request body
#[derive(Debug, Serialize)]
pub struct GoogleTranslateRequest<'a> {
    /// Text to translate
    pub q: &'a str,

    /// Target language code
    pub target: &'a str,

    /// Either "text" or "html"; plain text avoids HTML-escaped output
    pub format: &'a str,
}

/// Translation response envelope
#[derive(Debug, Deserialize)]
pub struct GoogleTranslateResponse {
    /// Response payload
    pub data: GoogleTranslateData,
}

/// Translation response payload
#[derive(Debug, Deserialize)]
pub struct GoogleTranslateData {
    /// One entry per `q` value
    pub translations: Vec<GoogleTranslation>,
}

/// A single translation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleTranslation {
    /// The translated text
    pub translated_text: String,

    /// Source language when it was auto-detected
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

impl GoogleTranslate {
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

    /// Pull the first translated string out of a response
    pub fn extract_text(response: GoogleTranslateResponse) -> Result<String, ProviderError> {
        response
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| ProviderError::ParseError("Response contained no translations".to_string()))
    }
}

#[async_trait]
impl TextTranslator for GoogleTranslate {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        let request = GoogleTranslateRequest {
            q: text,
            target: target_language,
            format: "text",
        };

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
            error!("Translation API error ({}): {}", status, error_text);
            return Err(error_for_status(status, error_text));
        }

        let body = response
            .json::<GoogleTranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if let Some(detected) = body
            .data
            .translations
            .first()
            .and_then(|t| t.detected_source_language.as_deref())
        {
            debug!("Translation provider detected source language '{}'", detected);
        }

        Self::extract_text(body)
    }
}

impl std::fmt::Debug for GoogleTranslate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslate")
            .field("endpoint", &self.api_url())
            .finish_non_exhaustive()
    }
}
