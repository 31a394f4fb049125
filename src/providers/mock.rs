/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockTranslator::working()` - Always succeeds with tagged text
 * - `MockTranslator::fixed(..)` - Always returns the same translation
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockTranslator::intermittent(n)` - Fails every nth request
 * - `MockTranslator::slow(ms)` - Succeeds after a delay
 * - `MockSpeech::working()` / `MockSpeech::failing()` - Same for speech synthesis
 *
 * Every mock counts its calls so tests can assert that a provider was skipped.
 */

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{SpeechSynthesizer, TextTranslator, VoiceConfig};

/// Fake MP3 payload returned by the working speech mock (an ID3 header)
pub const MOCK_AUDIO: &[u8] = b"ID3\x04\x00\x00\x00\x00\x00\x00";

/// Behavior mode for the mock providers
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Always succeeds with this exact text
    Fixed(String),
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Simulates slow response
    Slow { delay_ms: u64 },
}

/// Mock translation provider
#[derive(Debug, Clone)]
pub struct MockTranslator {
    behavior: MockBehavior,
    /// Request counter shared between clones
    request_count: Arc<AtomicUsize>,
    /// Last (text, target) pair received
    last_request: Arc<Mutex<Option<(String, String)>>>,
}

impl MockTranslator {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns `[<target>] <text>`
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Always returns `translation`
    pub fn fixed(translation: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(translation.into()))
    }

    /// Fails on every `fail_every`th request
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Succeeds like `working()` after sleeping `delay_ms`
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Number of translate calls so far
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// The last `(text, target)` pair sent to the provider
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request.lock().clone()
    }
}

#[async_trait]
impl TextTranslator for MockTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some((text.to_string(), target_language.to_string()));

        match &self.behavior {
            MockBehavior::Working => Ok(format!("[{}] {}", target_language, text)),
            MockBehavior::Fixed(translation) => Ok(translation.clone()),
            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                    })
                } else {
                    Ok(format!("[{}] {}", target_language, text))
                }
            }
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(format!("[{}] {}", target_language, text))
            }
        }
    }
}

/// Mock speech synthesis provider
#[derive(Debug, Clone)]
pub struct MockSpeech {
    failing: bool,
    request_count: Arc<AtomicUsize>,
    last_voice: Arc<Mutex<Option<VoiceConfig>>>,
}

impl MockSpeech {
    /// Returns `MOCK_AUDIO` for every request
    pub fn working() -> Self {
        Self {
            failing: false,
            request_count: Arc::new(AtomicUsize::new(0)),
            last_voice: Arc::new(Mutex::new(None)),
        }
    }

    /// Always errors
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::working()
        }
    }

    /// Number of synthesize calls so far
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Voice used by the last request
    pub fn last_voice(&self) -> Option<VoiceConfig> {
        self.last_voice.lock().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeech {
    async fn synthesize(&self, _text: &str, voice: &VoiceConfig) -> Result<Bytes, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        *self.last_voice.lock() = Some(voice.clone());

        if self.failing {
            return Err(ProviderError::ConnectionError("Simulated speech failure".to_string()));
        }
        Ok(Bytes::from_static(MOCK_AUDIO))
    }
}
