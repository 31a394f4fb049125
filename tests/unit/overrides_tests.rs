/*!
 * Tests for override table loading and application
 */

use yomiyaku::errors::AppError;
use yomiyaku::overrides::OverrideTable;

use crate::common;

#[test]
fn test_fromFile_withValidDocument_shouldLoadAllLanguages() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        dir.path(),
        "overrides.json",
        r#"{ "ja": { "Hello": "こんにちは" }, "ko": { "thank you": "감사합니다", "bye": "안녕" } }"#,
    )?;

    let table = OverrideTable::from_file(&path)?;
    assert_eq!(table.languages(), vec!["ja", "ko"]);
    assert_eq!(table.len("ja"), 1);
    assert_eq!(table.len("ko"), 2);
    assert_eq!(table.lookup_exact("ja", "hello"), Some("こんにちは"));
    Ok(())
}

#[test]
fn test_fromFile_withMissingFile_shouldBeFileError() {
    let result = OverrideTable::from_file("/nonexistent/overrides.json");
    assert!(matches!(result, Err(AppError::File(_))));
}

#[test]
fn test_fromJson_withArrayLanguage_shouldBeConfigError() {
    let result = OverrideTable::from_json_str(r#"{ "ja": ["hello"] }"#);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_fromJson_withEmptyDocument_shouldBeEmpty() {
    let table = OverrideTable::from_json_str("{}").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.lookup_exact("ja", "hello"), None);
}

#[test]
fn test_lookupExact_isScopedByLanguage() {
    let table = common::sample_overrides();
    assert_eq!(table.lookup_exact("ja", "sensei"), Some("先生"));
    assert_eq!(table.lookup_exact("en", "onigiri"), Some("rice ball"));
    assert_eq!(table.lookup_exact("en", "sensei"), None);
}

#[test]
fn test_wordSubstitution_shouldReplaceInsideSentence() {
    let table = common::sample_overrides();
    assert_eq!(
        table.apply_word_substitutions("en", "We ate Onigiri at TOKYO TOWER."),
        "We ate rice ball at Tokyo Tower."
    );
}

#[test]
fn test_wordSubstitution_shouldNotMatchInsideWords() {
    let table = common::sample_overrides();
    assert_eq!(table.apply_word_substitutions("en", "onigiris"), "onigiris");
}

#[test]
fn test_wordSubstitution_withUnknownLanguage_shouldBeIdentity() {
    let table = common::sample_overrides();
    assert_eq!(table.apply_word_substitutions("fr", "onigiri"), "onigiri");
}
