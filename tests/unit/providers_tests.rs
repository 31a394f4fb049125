/*!
 * Tests for the Google provider wire formats
 */

use yomiyaku::errors::ProviderError;
use yomiyaku::providers::VoiceConfig;
use yomiyaku::providers::google_translate::{GoogleTranslate, GoogleTranslateRequest, GoogleTranslateResponse};
use yomiyaku::providers::google_tts::{GoogleTts, SynthesizeRequest, SynthesizeResponse};

#[test]
fn test_translateRequest_shouldSerializePlainTextFormat() {
    let request = GoogleTranslateRequest {
        q: "hello",
        target: "ja",
        format: "text",
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({ "q": "hello", "target": "ja", "format": "text" }));
}

#[test]
fn test_extractText_shouldReturnFirstTranslation() {
    let response: GoogleTranslateResponse = serde_json::from_str(
        r#"{ "data": { "translations": [
            { "translatedText": "こんにちは", "detectedSourceLanguage": "en" }
        ] } }"#,
    )
    .unwrap();

    assert_eq!(
        response.data.translations[0].detected_source_language.as_deref(),
        Some("en")
    );
    assert_eq!(GoogleTranslate::extract_text(response).unwrap(), "こんにちは");
}

#[test]
fn test_extractText_withNoTranslations_shouldBeParseError() {
    let response: GoogleTranslateResponse =
        serde_json::from_str(r#"{ "data": { "translations": [] } }"#).unwrap();
    assert!(matches!(
        GoogleTranslate::extract_text(response),
        Err(ProviderError::ParseError(_))
    ));
}

#[test]
fn test_synthesizeRequest_shouldRequestMp3WithVoice() {
    let voice = VoiceConfig::new("ko-KR", "ko-KR-Neural2-A");
    let request = SynthesizeRequest::mp3("안녕하세요", &voice);
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "input": { "text": "안녕하세요" },
            "voice": { "languageCode": "ko-KR", "name": "ko-KR-Neural2-A" },
            "audioConfig": { "audioEncoding": "MP3" }
        })
    );
}

#[test]
fn test_decodeAudio_shouldDecodeBase64() {
    let response: SynthesizeResponse = serde_json::from_str(r#"{ "audioContent": "SUQzBA==" }"#).unwrap();
    let audio = GoogleTts::decode_audio(&response).unwrap();
    assert_eq!(&audio[..], b"ID3\x04");
}

#[test]
fn test_decodeAudio_withInvalidPayload_shouldBeParseError() {
    let response = SynthesizeResponse {
        audio_content: "not base64!".to_string(),
    };
    assert!(matches!(GoogleTts::decode_audio(&response), Err(ProviderError::ParseError(_))));
}

#[test]
fn test_clients_debug_shouldNotLeakApiKey() {
    let translate = GoogleTranslate::new("secret-key", "", 5);
    let tts = GoogleTts::new("secret-key", "https://tts.example.com/v1/text:synthesize/", 5);

    let translate_debug = format!("{:?}", translate);
    let tts_debug = format!("{:?}", tts);
    assert!(!translate_debug.contains("secret-key"));
    assert!(translate_debug.contains("translation.googleapis.com"));
    assert!(tts_debug.contains("https://tts.example.com/v1/text:synthesize\""));
}
