/*!
 * Tests for language code utilities
 */

use yomiyaku::Language;
use yomiyaku::language_utils::{get_language_name, normalize_to_part3};

#[test]
fn test_fromCode_withKnownCodes_shouldParse() {
    assert_eq!(Language::from_code("ja"), Some(Language::Japanese));
    assert_eq!(Language::from_code("ko"), Some(Language::Korean));
    assert_eq!(Language::from_code("en"), Some(Language::English));
}

#[test]
fn test_fromCode_shouldMatchKnownCodesCaseInsensitively() {
    assert_eq!(Language::from_code(" JA "), Some(Language::Japanese));
    assert_eq!(Language::from_code("Ko"), Some(Language::Korean));
    assert_eq!(Language::from_code("EN"), Some(Language::English));
}

#[test]
fn test_fromCode_withOtherCode_shouldKeepOriginalSpelling() {
    let language = Language::from_code(" zh-CN ").unwrap();
    assert_eq!(language, Language::Other("zh-CN".to_string()));
    assert_eq!(language.code(), "zh-CN");
}

#[test]
fn test_fromCode_withEmptyCode_shouldReturnNone() {
    assert_eq!(Language::from_code(""), None);
    assert_eq!(Language::from_code("   "), None);
}

#[test]
fn test_code_shouldRoundTripThroughDisplay() {
    for code in ["ja", "ko", "en", "fr"] {
        let language = Language::from_code(code).unwrap();
        assert_eq!(language.code(), code);
        assert_eq!(language.to_string(), code);
    }
}

#[test]
fn test_displayName_shouldUseEnglishNames() {
    assert_eq!(Language::Japanese.display_name(), "Japanese");
    assert_eq!(Language::Korean.display_name(), "Korean");
    assert_eq!(Language::Other("xx-yy".to_string()).display_name(), "xx-yy");
}

#[test]
fn test_normalizeToPart3_shouldHandleRegionSubtags() {
    assert_eq!(normalize_to_part3("ja").unwrap(), "jpn");
    assert_eq!(normalize_to_part3("kor").unwrap(), "kor");
    assert_eq!(normalize_to_part3("zh-CN").unwrap(), "zho");
    assert!(normalize_to_part3("invalid").is_err());
    assert!(get_language_name("").is_err());
}
