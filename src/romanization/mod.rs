/*!
 * Romanization of Japanese and Korean text.
 *
 * - `tokenizer`: morphological tokenizer abstraction and the vibrato dictionary backend
 * - `japanese`: reading reconstruction with particle corrections
 * - `kana`: katakana/hiragana folding and Hepburn romaji
 * - `korean`: Revised Romanization of Hangul
 */

pub use self::japanese::ReadingReconstructor;
pub use self::tokenizer::{DictionaryTokenizer, MorphologicalTokenizer, PartOfSpeech, Token, TokenizerHandle};

pub mod japanese;
pub mod kana;
pub mod korean;
pub mod tokenizer;
