/*!
 * Kana script conversion.
 *
 * Katakana readings produced by the dictionary are folded into hiragana,
 * and hiragana is rendered in modified Hepburn romanization.
 */

/// Convert katakana to hiragana.
///
/// The long vowel mark `ー` following a kana is replaced by that kana's
/// vowel (`ラーメン` becomes `らあめん`), except that a long `o` is spelled
/// `う` (`コーヒー` becomes `こうひい`). Everything else is left untouched.
pub fn to_hiragana(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous: Option<char> = None;

    for c in text.chars() {
        let converted = if ('\u{30A1}'..='\u{30F6}').contains(&c) {
            char::from_u32(c as u32 - 0x60).unwrap_or(c)
        } else if c == 'ー' {
            previous.and_then(vowel_of).unwrap_or(c)
        } else {
            c
        };

        result.push(converted);
        previous = Some(converted);
    }

    result
}

/// Convert kana to romaji (modified Hepburn).
///
/// Katakana is folded to hiragana first. Characters without a romanization
/// (kanji, Latin text, digits) pass through unchanged.
pub fn to_romaji(text: &str) -> String {
    let chars: Vec<char> = to_hiragana(text).chars().collect();
    let mut result = String::with_capacity(text.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            // Sokuon doubles the following consonant; っち is "tchi"
            'っ' => {
                if let Some((next, _)) = syllable_at(&chars, i + 1) {
                    if next.starts_with("ch") {
                        result.push('t');
                    } else if let Some(first) = next.chars().next().filter(|f| !is_vowel(*f) && *f != 'n') {
                        result.push(first);
                    }
                }
                i += 1;
            }
            'ん' => {
                result.push('n');
                if let Some((next, _)) = syllable_at(&chars, i + 1) {
                    if next.starts_with(|f: char| is_vowel(f) || f == 'y') {
                        result.push('\'');
                    }
                }
                i += 1;
            }
            _ => match syllable_at(&chars, i) {
                Some((romaji, width)) => {
                    result.push_str(romaji);
                    i += width;
                }
                None => {
                    result.push(punctuation(c).unwrap_or(c));
                    i += 1;
                }
            },
        }
    }

    result
}

/// Romaji for the syllable starting at `index`, with the number of kana consumed
fn syllable_at(chars: &[char], index: usize) -> Option<(&'static str, usize)> {
    let c = *chars.get(index)?;
    if let Some(next) = chars.get(index + 1) {
        if let Some(romaji) = digraph(c, *next) {
            return Some((romaji, 2));
        }
    }
    monograph(c).map(|romaji| (romaji, 1))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Hiragana spelling of a lengthened kana, used to expand `ー`
fn vowel_of(c: char) -> Option<char> {
    let romaji = monograph(c)?;
    match romaji.chars().last()? {
        'a' => Some('あ'),
        'i' => Some('い'),
        'u' => Some('う'),
        'e' => Some('え'),
        'o' => Some('う'),
        _ => None,
    }
}

fn monograph(c: char) -> Option<&'static str> {
    let romaji = match c {
        'あ' => "a", 'い' => "i", 'う' => "u", 'え' => "e", 'お' => "o",
        'か' => "ka", 'き' => "ki", 'く' => "ku", 'け' => "ke", 'こ' => "ko",
        'が' => "ga", 'ぎ' => "gi", 'ぐ' => "gu", 'げ' => "ge", 'ご' => "go",
        'さ' => "sa", 'し' => "shi", 'す' => "su", 'せ' => "se", 'そ' => "so",
        'ざ' => "za", 'じ' => "ji", 'ず' => "zu", 'ぜ' => "ze", 'ぞ' => "zo",
        'た' => "ta", 'ち' => "chi", 'つ' => "tsu", 'て' => "te", 'と' => "to",
        'だ' => "da", 'ぢ' => "ji", 'づ' => "zu", 'で' => "de", 'ど' => "do",
        'な' => "na", 'に' => "ni", 'ぬ' => "nu", 'ね' => "ne", 'の' => "no",
        'は' => "ha", 'ひ' => "hi", 'ふ' => "fu", 'へ' => "he", 'ほ' => "ho",
        'ば' => "ba", 'び' => "bi", 'ぶ' => "bu", 'べ' => "be", 'ぼ' => "bo",
        'ぱ' => "pa", 'ぴ' => "pi", 'ぷ' => "pu", 'ぺ' => "pe", 'ぽ' => "po",
        'ま' => "ma", 'み' => "mi", 'む' => "mu", 'め' => "me", 'も' => "mo",
        'や' => "ya", 'ゆ' => "yu", 'よ' => "yo",
        'ら' => "ra", 'り' => "ri", 'る' => "ru", 'れ' => "re", 'ろ' => "ro",
        'わ' => "wa", 'ゐ' => "wi", 'ゑ' => "we", 'を' => "wo", 'ん' => "n",
        'ゔ' => "vu",
        'ぁ' => "a", 'ぃ' => "i", 'ぅ' => "u", 'ぇ' => "e", 'ぉ' => "o",
        'ゃ' => "ya", 'ゅ' => "yu", 'ょ' => "yo", 'ゎ' => "wa",
        'ゕ' => "ka", 'ゖ' => "ke",
        _ => return None,
    };
    Some(romaji)
}

fn digraph(c: char, next: char) -> Option<&'static str> {
    let romaji = match (c, next) {
        ('き', 'ゃ') => "kya", ('き', 'ゅ') => "kyu", ('き', 'ょ') => "kyo",
        ('ぎ', 'ゃ') => "gya", ('ぎ', 'ゅ') => "gyu", ('ぎ', 'ょ') => "gyo",
        ('し', 'ゃ') => "sha", ('し', 'ゅ') => "shu", ('し', 'ょ') => "sho", ('し', 'ぇ') => "she",
        ('じ', 'ゃ') => "ja", ('じ', 'ゅ') => "ju", ('じ', 'ょ') => "jo", ('じ', 'ぇ') => "je",
        ('ち', 'ゃ') => "cha", ('ち', 'ゅ') => "chu", ('ち', 'ょ') => "cho", ('ち', 'ぇ') => "che",
        ('ぢ', 'ゃ') => "ja", ('ぢ', 'ゅ') => "ju", ('ぢ', 'ょ') => "jo",
        ('に', 'ゃ') => "nya", ('に', 'ゅ') => "nyu", ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya", ('ひ', 'ゅ') => "hyu", ('ひ', 'ょ') => "hyo",
        ('び', 'ゃ') => "bya", ('び', 'ゅ') => "byu", ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya", ('ぴ', 'ゅ') => "pyu", ('ぴ', 'ょ') => "pyo",
        ('み', 'ゃ') => "mya", ('み', 'ゅ') => "myu", ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya", ('り', 'ゅ') => "ryu", ('り', 'ょ') => "ryo",
        ('ふ', 'ぁ') => "fa", ('ふ', 'ぃ') => "fi", ('ふ', 'ぇ') => "fe", ('ふ', 'ぉ') => "fo",
        ('て', 'ぃ') => "ti", ('で', 'ぃ') => "di", ('と', 'ぅ') => "tu", ('ど', 'ぅ') => "du",
        ('う', 'ぃ') => "wi", ('う', 'ぇ') => "we", ('う', 'ぉ') => "wo",
        ('ゔ', 'ぁ') => "va", ('ゔ', 'ぃ') => "vi", ('ゔ', 'ぇ') => "ve", ('ゔ', 'ぉ') => "vo",
        ('つ', 'ぁ') => "tsa", ('つ', 'ぇ') => "tse", ('つ', 'ぉ') => "tso",
        _ => return None,
    };
    Some(romaji)
}

fn punctuation(c: char) -> Option<char> {
    let ascii = match c {
        '。' => '.',
        '、' => ',',
        '：' => ':',
        '・' => '/',
        '！' => '!',
        '？' => '?',
        '〜' => '~',
        'ー' => '-',
        '「' => '‘',
        '」' => '’',
        '『' => '“',
        '』' => '”',
        '［' => '[',
        '］' => ']',
        '（' => '(',
        '）' => ')',
        '｛' => '{',
        '｝' => '}',
        '　' => ' ',
        _ => return None,
    };
    Some(ascii)
}
