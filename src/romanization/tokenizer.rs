/*!
 * Morphological tokenizer abstraction.
 *
 * The Japanese reading reconstruction only needs three things from a
 * tokenizer: the surface form of each morpheme, its katakana reading and
 * its part of speech. `MorphologicalTokenizer` exposes exactly that, and
 * `DictionaryTokenizer` provides it from a compiled MeCab IPADIC dictionary
 * through vibrato.
 */

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::info;
use once_cell::sync::OnceCell;
use vibrato::{Dictionary, Tokenizer};

use crate::errors::ReadingError;

/// IPADIC feature column holding the part-of-speech tag
const FEATURE_POS: usize = 0;

/// IPADIC feature column holding the katakana reading
const FEATURE_READING: usize = 7;

/// Coarse part of speech of a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    /// 助詞
    Particle,
    /// 感動詞
    Interjection,
    /// Any other tag, kept verbatim
    Other(String),
}

impl PartOfSpeech {
    /// Map an IPADIC part-of-speech tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "助詞" => Self::Particle,
            "感動詞" => Self::Interjection,
            other => Self::Other(other.to_string()),
        }
    }

    /// Particles and interjections get the は/へ reading corrections
    pub fn is_particle_or_interjection(&self) -> bool {
        matches!(self, Self::Particle | Self::Interjection)
    }
}

/// A single morpheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Literal text of the segment
    pub surface_form: String,

    /// Katakana pronunciation, absent for unknown words and symbols
    pub reading: Option<String>,

    /// Part of speech
    pub part_of_speech: PartOfSpeech,
}

impl Token {
    /// Create a token
    pub fn new(surface_form: impl Into<String>, reading: Option<&str>, part_of_speech: PartOfSpeech) -> Self {
        Self {
            surface_form: surface_form.into(),
            reading: reading.map(str::to_string),
            part_of_speech,
        }
    }

    /// Build a token from a surface and an IPADIC feature string
    /// (`助詞,係助詞,*,*,*,*,は,ハ,ワ`)
    pub fn from_ipadic(surface: &str, feature: &str) -> Self {
        let columns: Vec<&str> = feature.split(',').collect();
        let pos = columns.get(FEATURE_POS).copied().unwrap_or("*");
        let reading = columns
            .get(FEATURE_READING)
            .copied()
            .filter(|reading| !reading.is_empty() && *reading != "*");

        Self::new(surface, reading, PartOfSpeech::from_tag(pos))
    }
}

/// Splits Japanese text into tokens. Implementations must be usable from
/// many requests at once.
pub trait MorphologicalTokenizer: Send + Sync {
    /// Tokenize `text` into an ordered token sequence
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Tokenizer backed by a compiled vibrato dictionary
pub struct DictionaryTokenizer {
    tokenizer: Tokenizer,
}

impl DictionaryTokenizer {
    /// Read a compiled dictionary. Paths ending in `.zst` are decompressed
    /// on the fly. This is blocking and can take several seconds.
    pub fn build<P: AsRef<Path>>(path: P) -> Result<Self, ReadingError> {
        let path = path.as_ref();
        let start = Instant::now();

        let file = File::open(path)
            .map_err(|e| ReadingError::Dictionary(format!("Failed to open {}: {}", path.display(), e)))?;

        let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "zst") {
            Box::new(
                zstd::Decoder::new(file)
                    .map_err(|e| ReadingError::Dictionary(format!("Failed to decompress {}: {}", path.display(), e)))?,
            )
        } else {
            Box::new(BufReader::new(file))
        };

        let dictionary = Dictionary::read(reader)
            .map_err(|e| ReadingError::Dictionary(format!("Failed to read {}: {}", path.display(), e)))?;

        info!("Loaded dictionary {} in {:.2?}", path.display(), start.elapsed());

        Ok(Self {
            tokenizer: Tokenizer::new(dictionary),
        })
    }
}

impl MorphologicalTokenizer for DictionaryTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        worker
            .token_iter()
            .map(|token| Token::from_ipadic(token.surface(), token.feature()))
            .collect()
    }
}

impl fmt::Debug for DictionaryTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryTokenizer").finish_non_exhaustive()
    }
}

/// One-time slot for the shared tokenizer.
///
/// The dictionary is built once at startup and installed here; until then
/// every lookup reports "not ready" instead of waiting.
#[derive(Default)]
pub struct TokenizerHandle {
    cell: OnceCell<Arc<dyn MorphologicalTokenizer>>,
}

impl TokenizerHandle {
    /// Create an empty handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that is ready immediately
    pub fn with_tokenizer<T: MorphologicalTokenizer + 'static>(tokenizer: T) -> Self {
        let handle = Self::new();
        // A fresh cell always accepts the first value
        let _ = handle.cell.set(Arc::new(tokenizer));
        handle
    }

    /// Install the tokenizer. Fails if one was already installed.
    pub fn install(&self, tokenizer: Arc<dyn MorphologicalTokenizer>) -> Result<(), ReadingError> {
        self.cell
            .set(tokenizer)
            .map_err(|_| ReadingError::AlreadyInitialized)
    }

    /// The installed tokenizer, if any
    pub fn get(&self) -> Option<&Arc<dyn MorphologicalTokenizer>> {
        self.cell.get()
    }

    /// Whether the tokenizer has been installed
    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for TokenizerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}
