/*!
 * Tests for the pronunciation service
 */

use std::sync::Arc;

use yomiyaku::app_config::VoicesConfig;
use yomiyaku::errors::SpeechError;
use yomiyaku::providers::mock::{MOCK_AUDIO, MockSpeech};
use yomiyaku::speech::SpeechService;

fn service(speech: &MockSpeech) -> SpeechService {
    SpeechService::new(Arc::new(speech.clone()), VoicesConfig::default())
}

#[tokio::test]
async fn test_pronounce_withJapanese_shouldUseJapaneseVoice() {
    let speech = MockSpeech::working();
    let audio = service(&speech).pronounce("こんにちは", "ja").await.unwrap();

    assert_eq!(&audio[..], MOCK_AUDIO);
    let voice = speech.last_voice().unwrap();
    assert_eq!(voice.language_code, "ja-JP");
    assert_eq!(voice.name, "ja-JP-Neural2-B");
}

#[tokio::test]
async fn test_pronounce_withKorean_shouldUseKoreanVoice() {
    let speech = MockSpeech::working();
    service(&speech).pronounce("안녕하세요", "ko").await.unwrap();

    let voice = speech.last_voice().unwrap();
    assert_eq!(voice.language_code, "ko-KR");
    assert_eq!(voice.name, "ko-KR-Neural2-A");
}

#[tokio::test]
async fn test_pronounce_withEmptyText_shouldRejectWithoutCallingProvider() {
    let speech = MockSpeech::working();
    let result = service(&speech).pronounce("   ", "ko").await;

    assert!(matches!(result, Err(SpeechError::InvalidInput(_))));
    assert_eq!(speech.call_count(), 0);
}

#[tokio::test]
async fn test_pronounce_withUnsupportedLanguage_shouldReject() {
    let speech = MockSpeech::working();
    let service = service(&speech);

    assert!(matches!(service.pronounce("hello", "en").await, Err(SpeechError::InvalidInput(_))));
    assert!(matches!(service.pronounce("hello", "").await, Err(SpeechError::InvalidInput(_))));
    assert_eq!(speech.call_count(), 0);
}

#[tokio::test]
async fn test_pronounce_withFailingProvider_shouldReturnProviderError() {
    let speech = MockSpeech::failing();
    let result = service(&speech).pronounce("안녕", "ko").await;

    assert!(matches!(result, Err(SpeechError::Provider(_))));
    assert_eq!(speech.call_count(), 1);
}
