/*!
 * Tests for configuration loading and validation
 */

use yomiyaku::Language;
use yomiyaku::app_config::{Config, LogLevel};
use yomiyaku::providers::{google_translate, google_tts};

use crate::common;

fn valid_config() -> Config {
    let mut config = Config::default();
    config.google.api_key = "test-key".to_string();
    config
}

/// Test that the defaults match the documented service settings
#[test]
fn test_default_config_shouldUseServiceDefaults() {
    let config = Config::default();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
    assert!(config.server.allowed_origins.is_empty());
    assert_eq!(config.server.static_dir.as_deref(), Some("public"));
    assert_eq!(config.google.translate_endpoint, google_translate::DEFAULT_ENDPOINT);
    assert_eq!(config.google.tts_endpoint, google_tts::DEFAULT_ENDPOINT);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test voice selection per language
#[test]
fn test_voiceFor_shouldOnlyCoverJapaneseAndKorean() {
    let config = Config::default();
    let japanese = config.voices.voice_for(&Language::Japanese).unwrap();
    assert_eq!(japanese.language_code, "ja-JP");
    assert_eq!(japanese.name, "ja-JP-Neural2-B");

    let korean = config.voices.voice_for(&Language::Korean).unwrap();
    assert_eq!(korean.language_code, "ko-KR");
    assert_eq!(korean.name, "ko-KR-Neural2-A");

    assert!(config.voices.voice_for(&Language::English).is_none());
    assert!(config.voices.voice_for(&Language::Other("fr".to_string())).is_none());
}

/// Test that a partial file falls back to defaults for missing fields
#[test]
fn test_fromFile_withPartialDocument_shouldFillDefaults() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        dir.path(),
        "conf.json",
        r#"{ "server": { "port": 8080, "allowed_origins": ["https://example.com"] }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.allowed_origins, vec!["https://example.com".to_string()]);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(config.dictionary_path, "dict/system.dic.zst");
    Ok(())
}

/// Test that a missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefault() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(config.server.port, 3000);

    let reloaded = Config::from_file(&path)?;
    assert_eq!(reloaded.server.port, config.server.port);
    assert_eq!(reloaded.overrides_path, config.overrides_path);
    Ok(())
}

/// Test that malformed JSON is reported
#[test]
fn test_fromFile_withInvalidJson_shouldFail() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(dir.path(), "conf.json", "{ not json")?;
    assert!(Config::from_file(&path).is_err());
    Ok(())
}

#[test]
fn test_validate_withApiKey_shouldPass() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn test_validate_withoutApiKey_shouldFail() {
    let config = Config::default();
    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("API key"));
}

#[test]
fn test_validate_withZeroPort_shouldFail() {
    let mut config = valid_config();
    config.server.port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withInvalidOrigin_shouldFail() {
    let mut config = valid_config();
    config.server.allowed_origins = vec!["not a url".to_string()];
    assert!(config.validate().is_err());

    config.server.allowed_origins = vec!["http://localhost:5173".to_string()];
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withInvalidEndpoint_shouldFail() {
    let mut config = valid_config();
    config.google.translate_endpoint = "::nope".to_string();
    assert!(config.validate().is_err());
}
