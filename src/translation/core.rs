/*!
 * Core translation functionality.
 *
 * `TranslationService` ties the override table, the translation provider and
 * the romanizers together:
 *
 * 1. an exact override for the whole phrase replaces the provider call,
 * 2. word-level overrides are applied to whatever came back,
 * 3. Japanese or Korean text on either side of the request is romanized.
 */

use std::sync::Arc;

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{ReadingError, TranslationError};
use crate::language_utils::Language;
use crate::overrides::OverrideTable;
use crate::providers::TextTranslator;
use crate::romanization::ReadingReconstructor;
use crate::romanization::korean;

/// Romanization reported while the Japanese analyzer is still loading
pub const ANALYZER_NOT_READY: &str = "Analyzer not ready";

/// Result of a translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Final translated text
    pub translation: String,

    /// Romanized pronunciation, `null` when neither side is Japanese or Korean
    pub romanization: Option<String>,
}

/// Which text gets romanized, and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomanizationPlan {
    /// Japanese reading of the translated text
    JapaneseTranslation,
    /// Korean romanization of the translated text
    KoreanTranslation,
    /// Japanese reading of the original input
    JapaneseSource,
    /// Korean romanization of the original input
    KoreanSource,
}

impl RomanizationPlan {
    /// Select the romanization for a language pair
    pub fn select(source: Option<&Language>, target: &Language) -> Option<Self> {
        match (target, source) {
            (Language::Japanese, _) => Some(Self::JapaneseTranslation),
            (Language::Korean, _) => Some(Self::KoreanTranslation),
            (Language::English, Some(Language::Japanese)) => Some(Self::JapaneseSource),
            (Language::English, Some(Language::Korean)) => Some(Self::KoreanSource),
            (Language::English, _) | (Language::Other(_), _) => None,
        }
    }
}

/// Translation orchestrator
#[derive(Debug, Clone)]
pub struct TranslationService {
    overrides: Arc<OverrideTable>,
    translator: Arc<dyn TextTranslator>,
    reader: ReadingReconstructor,
}

impl TranslationService {
    /// Create a service from its collaborators
    pub fn new(overrides: Arc<OverrideTable>, translator: Arc<dyn TextTranslator>, reader: ReadingReconstructor) -> Self {
        Self {
            overrides,
            translator,
            reader,
        }
    }

    /// Whether Japanese romanization is available
    pub fn analyzer_ready(&self) -> bool {
        self.reader.is_ready()
    }

    /// Validate raw request fields and translate.
    ///
    /// `source` may be absent or empty; `text` and `target` are required.
    pub async fn translate_request(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> Result<TranslationResult, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::InvalidInput("text is empty".to_string()));
        }
        let target = Language::from_code(target)
            .ok_or_else(|| TranslationError::InvalidInput("target language is empty".to_string()))?;
        let source = source.and_then(Language::from_code);

        self.translate(text, source.as_ref(), &target).await
    }

    /// Translate `text` into `target` and romanize where applicable
    pub async fn translate(
        &self,
        text: &str,
        source: Option<&Language>,
        target: &Language,
    ) -> Result<TranslationResult, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::InvalidInput("text is empty".to_string()));
        }

        let target_code = target.code();
        let normalized = text.trim().to_lowercase();

        let translated = match self.overrides.lookup_exact(target_code, &normalized) {
            Some(replacement) => {
                debug!("Exact override hit for '{}' ({})", normalized, target_code);
                replacement.to_string()
            }
            None => self
                .translator
                .translate(text, target_code)
                .await
                .inspect_err(|e| error!("Translation Error ({}): {}", target.display_name(), e))?,
        };

        // Word overrides also run on exact hits
        let translation = self.overrides.apply_word_substitutions(target_code, &translated);

        let romanization = RomanizationPlan::select(source, target).and_then(|plan| {
            debug!("Romanizing with {:?}", plan);
            self.romanize(plan, text, &translation)
        });

        Ok(TranslationResult {
            translation,
            romanization,
        })
    }

    fn romanize(&self, plan: RomanizationPlan, source_text: &str, translation: &str) -> Option<String> {
        match plan {
            RomanizationPlan::JapaneseTranslation => japanese_romanization(self.reader.romanize(translation)),
            RomanizationPlan::JapaneseSource => japanese_romanization(self.reader.romanize(source_text)),
            RomanizationPlan::KoreanTranslation => Some(korean::romanize(translation)),
            RomanizationPlan::KoreanSource => Some(korean::romanize(source_text)),
        }
    }
}

/// Romanization reported for a Japanese reading attempt. A missing analyzer
/// yields the placeholder; analyzer failures drop the romanization.
fn japanese_romanization(reading: Result<String, ReadingError>) -> Option<String> {
    match reading {
        Ok(romaji) => Some(romaji),
        Err(ReadingError::NotReady) => {
            warn!("Japanese romanization requested before the analyzer finished loading");
            Some(ANALYZER_NOT_READY.to_string())
        }
        Err(e @ (ReadingError::AlreadyInitialized | ReadingError::Dictionary(_))) => {
            error!("Japanese romanization failed: {}", e);
            None
        }
    }
}
