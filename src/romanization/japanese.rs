/*!
 * Japanese reading reconstruction.
 *
 * Dictionary readings give the written pronunciation of each morpheme, which
 * is wrong for the topic particle は (read "wa") and the directional particle
 * へ (read "e"). The reconstructor walks the token stream, corrects those two
 * particles, and romanizes the assembled hiragana reading.
 */

use std::sync::Arc;

use log::trace;

use crate::errors::ReadingError;
use crate::romanization::kana::{to_hiragana, to_romaji};
use crate::romanization::tokenizer::{Token, TokenizerHandle};

const TOPIC_PARTICLE: &str = "は";
const TOPIC_PARTICLE_READING: &str = "わ";
const DIRECTION_PARTICLE: &str = "へ";
const DIRECTION_PARTICLE_READING: &str = "え";

/// Builds hiragana readings and romaji for Japanese text
#[derive(Debug, Clone)]
pub struct ReadingReconstructor {
    tokenizer: Arc<TokenizerHandle>,
}

impl ReadingReconstructor {
    /// Create a reconstructor over a shared tokenizer handle
    pub fn new(tokenizer: Arc<TokenizerHandle>) -> Self {
        Self { tokenizer }
    }

    /// Whether the underlying tokenizer is available
    pub fn is_ready(&self) -> bool {
        self.tokenizer.is_ready()
    }

    /// Hiragana reading of `text` with particle corrections applied
    pub fn reading(&self, text: &str) -> Result<String, ReadingError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let tokenizer = self.tokenizer.get().ok_or(ReadingError::NotReady)?;
        let tokens = tokenizer.tokenize(text);
        trace!("Tokenized {} chars into {} tokens", text.chars().count(), tokens.len());

        Ok(assemble_reading(&tokens))
    }

    /// Romanized reading of `text`
    pub fn romanize(&self, text: &str) -> Result<String, ReadingError> {
        let reading = self.reading(text)?;
        Ok(to_romaji(&reading))
    }
}

/// Concatenate token readings, correcting は and へ when they act as particles
pub fn assemble_reading(tokens: &[Token]) -> String {
    let mut reading = String::new();

    for token in tokens {
        if token.part_of_speech.is_particle_or_interjection() {
            if token.surface_form == TOPIC_PARTICLE {
                reading.push_str(TOPIC_PARTICLE_READING);
                continue;
            }
            if token.surface_form == DIRECTION_PARTICLE {
                reading.push_str(DIRECTION_PARTICLE_READING);
                continue;
            }
        }

        match &token.reading {
            Some(kana) => reading.push_str(&to_hiragana(kana)),
            None => reading.push_str(&token.surface_form),
        }
    }

    // Sentence-final は that slipped past the per-token pass
    if let Some(stripped) = reading.strip_suffix(TOPIC_PARTICLE) {
        reading = format!("{}{}", stripped, TOPIC_PARTICLE_READING);
    }

    reading
}
