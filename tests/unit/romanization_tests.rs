/*!
 * Tests for Japanese readings and Korean romanization
 */

use std::sync::Arc;

use yomiyaku::errors::ReadingError;
use yomiyaku::romanization::{
    DictionaryTokenizer, MorphologicalTokenizer, PartOfSpeech, ReadingReconstructor, TokenizerHandle, kana, korean,
};

use crate::common::{self, ScriptedTokenizer};

#[test]
fn test_reading_withTopicParticle_shouldReadWa() {
    let reader = common::ready_reader();
    assert_eq!(reader.reading("私は学生です").unwrap(), "わたしわがくせいです");
    assert_eq!(reader.romanize("私は学生です").unwrap(), "watashiwagakuseidesu");
}

#[test]
fn test_reading_withDirectionParticle_shouldReadE() {
    let reader = common::ready_reader();
    assert_eq!(reader.romanize("学校へ行きます").unwrap(), "gakkoueikimasu");
}

#[test]
fn test_romanize_withGreeting_shouldEndInWa() {
    let reader = common::ready_reader();
    assert_eq!(reader.romanize("こんにちは").unwrap(), "konnichiwa");
    assert_eq!(reader.romanize("ありがとう").unwrap(), "arigatou");
}

#[test]
fn test_romanize_withUnknownText_shouldConvertKanaSurfaces() {
    let reader = common::ready_reader();
    assert_eq!(reader.romanize("ねこ").unwrap(), "neko");
}

#[test]
fn test_reading_beforeInstall_shouldBeNotReady() {
    let handle = Arc::new(TokenizerHandle::new());
    let reader = ReadingReconstructor::new(Arc::clone(&handle));
    assert!(matches!(reader.reading("こんにちは"), Err(ReadingError::NotReady)));

    handle.install(Arc::new(ScriptedTokenizer::new())).unwrap();
    assert!(reader.is_ready());
    assert_eq!(reader.romanize("こんにちは").unwrap(), "konnichiwa");
}

fn dictionary_reader(filename: &str) -> anyhow::Result<(tempfile::TempDir, ReadingReconstructor)> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_dictionary(dir.path(), filename)?;
    let tokenizer = DictionaryTokenizer::build(&path)?;
    let reader = ReadingReconstructor::new(Arc::new(TokenizerHandle::with_tokenizer(tokenizer)));
    Ok((dir, reader))
}

#[test]
fn test_dictionaryTokenizer_shouldReadIpadicFeatures() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_dictionary(dir.path(), "system.dic")?;
    let tokenizer = DictionaryTokenizer::build(&path)?;

    let tokens = tokenizer.tokenize("私は学生です");
    let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface_form.as_str()).collect();
    assert_eq!(surfaces, vec!["私", "は", "学生", "です"]);
    assert_eq!(tokens[1].part_of_speech, PartOfSpeech::Particle);
    assert_eq!(tokens[1].reading.as_deref(), Some("ハ"));
    assert_eq!(tokens[2].reading.as_deref(), Some("ガクセイ"));

    let unknown = tokenizer.tokenize("ABC");
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].surface_form, "ABC");
    assert_eq!(unknown[0].reading, None);
    Ok(())
}

#[test]
fn test_dictionaryReader_shouldCorrectParticles() -> anyhow::Result<()> {
    let (_dir, reader) = dictionary_reader("system.dic")?;

    assert_eq!(reader.romanize("私は学生です")?, "watashiwagakuseidesu");
    assert_eq!(reader.romanize("東京へ")?, "toukyoue");
    assert_eq!(reader.romanize("ABC")?, "ABC");
    Ok(())
}

#[test]
fn test_dictionaryReader_withCompressedDictionary_shouldLoad() -> anyhow::Result<()> {
    let (_dir, reader) = dictionary_reader("system.dic.zst")?;
    assert_eq!(reader.romanize("東京へ")?, "toukyoue");
    Ok(())
}

#[test]
fn test_dictionaryReader_fromManyThreads_shouldAgree() -> anyhow::Result<()> {
    let (_dir, reader) = dictionary_reader("system.dic")?;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| reader.romanize("私は学生です")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "watashiwagakuseidesu");
        }
    });
    Ok(())
}

#[test]
fn test_kana_toRomaji_withKatakanaLoanword() {
    assert_eq!(kana::to_romaji(&kana::to_hiragana("コーヒー")), "kouhii");
    assert_eq!(kana::to_romaji(&kana::to_hiragana("ボール")), "bouru");
}

#[test]
fn test_korean_romanize_commonPhrases() {
    assert_eq!(korean::romanize("감사합니다"), "gamsahamnida");
    assert_eq!(korean::romanize("안녕하세요"), "annyeonghaseyo");
    assert_eq!(korean::romanize("서울"), "seoul");
}

#[test]
fn test_korean_romanize_shouldKeepSpacesAndPunctuation() {
    assert_eq!(korean::romanize("한국 사람?"), "hanguk saram?");
}

#[test]
fn test_korean_romanize_withEmptyInput_shouldReturnEmpty() {
    assert_eq!(korean::romanize(""), "");
}
