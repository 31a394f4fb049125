/*!
 * Custom translation overrides.
 *
 * The override document maps a target language code to a set of
 * `phrase -> replacement` pairs:
 *
 * ```json
 * { "ja": { "hello": "こんにちは", "sensei": "先生" } }
 * ```
 *
 * A pair is used in two ways: as an exact match for a whole request phrase
 * (which skips the translation provider), and as a whole-word substitution
 * applied to every translated result for that language.
 */

use std::collections::HashMap;
use std::path::Path;

use log::{debug, warn};
use regex::{NoExpand, Regex, RegexBuilder};

use crate::errors::AppError;

/// A single whole-word substitution rule
#[derive(Debug, Clone)]
struct WordRule {
    /// Compiled case-insensitive matcher for the literal term
    pattern: Regex,

    /// Text inserted in place of every match
    replacement: String,
}

/// Overrides registered for one target language
#[derive(Debug, Clone, Default)]
struct LanguageOverrides {
    /// Lowercased phrase to replacement, for whole-phrase lookups
    exact: HashMap<String, String>,

    /// Substitution rules in document order
    words: Vec<WordRule>,
}

/// Read-only override table, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    languages: HashMap<String, LanguageOverrides>,
}

impl OverrideTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(language, [(phrase, replacement)])` entries.
    /// Phrases are lowercased; order within a language is kept.
    pub fn from_entries<L, P, R>(entries: impl IntoIterator<Item = (L, Vec<(P, R)>)>) -> Result<Self, AppError>
    where
        L: Into<String>,
        P: Into<String>,
        R: Into<String>,
    {
        let mut table = Self::new();
        for (language, pairs) in entries {
            let language = language.into().trim().to_lowercase();
            let overrides = table.languages.entry(language.clone()).or_default();

            for (phrase, replacement) in pairs {
                let phrase = phrase.into().to_lowercase();
                let replacement = replacement.into();

                if phrase.is_empty() {
                    warn!("Skipping empty override phrase for '{}'", language);
                    continue;
                }

                let pattern = word_pattern(&phrase)
                    .map_err(|e| AppError::Config(format!("Invalid override term '{}': {}", phrase, e)))?;

                // A repeated key replaces the earlier rule in place
                let is_repeat = overrides.exact.contains_key(&phrase);
                overrides.exact.insert(phrase, replacement.clone());
                if is_repeat {
                    if let Some(rule) = overrides
                        .words
                        .iter_mut()
                        .find(|rule| rule.pattern.as_str() == pattern.as_str())
                    {
                        rule.replacement = replacement;
                        continue;
                    }
                }
                overrides.words.push(WordRule { pattern, replacement });
            }
        }
        Ok(table)
    }

    /// Parse the override JSON document
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(document.len());
        for (language, value) in document {
            let serde_json::Value::Object(pairs) = value else {
                return Err(AppError::Config(format!(
                    "Overrides for '{}' must be an object of phrase/replacement pairs",
                    language
                )));
            };

            let mut language_pairs = Vec::with_capacity(pairs.len());
            for (phrase, replacement) in pairs {
                let serde_json::Value::String(replacement) = replacement else {
                    return Err(AppError::Config(format!(
                        "Override '{}' for '{}' must map to a string",
                        phrase, language
                    )));
                };
                language_pairs.push((phrase, replacement));
            }
            entries.push((language, language_pairs));
        }

        Self::from_entries(entries)
    }

    /// Load the override document from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::File(format!("Failed to read overrides {}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Exact-match lookup. `phrase` must already be lowercased and trimmed;
    /// the language code may use any case.
    /// An empty replacement counts as no match.
    pub fn lookup_exact(&self, language: &str, phrase: &str) -> Option<&str> {
        self.overrides_for(language)
            .and_then(|overrides| overrides.exact.get(phrase))
            .map(String::as_str)
            .filter(|replacement| !replacement.is_empty())
    }

    /// Replace every case-insensitive whole-word occurrence of each term
    /// registered for `language`, in document order.
    pub fn apply_word_substitutions(&self, language: &str, text: &str) -> String {
        let Some(overrides) = self.overrides_for(language) else {
            return text.to_string();
        };

        let mut result = text.to_string();
        for rule in &overrides.words {
            if rule.pattern.is_match(&result) {
                debug!("Applying override '{}' for '{}'", rule.pattern.as_str(), language);
                result = rule
                    .pattern
                    .replace_all(&result, NoExpand(&rule.replacement))
                    .into_owned();
            }
        }
        result
    }

    /// Languages that have at least one override, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Number of overrides registered for a language
    pub fn len(&self, language: &str) -> usize {
        self.overrides_for(language)
            .map_or(0, |overrides| overrides.exact.len())
    }

    /// Overrides for a language code, compared case-insensitively
    fn overrides_for(&self, language: &str) -> Option<&LanguageOverrides> {
        self.languages.get(&language.trim().to_lowercase())
    }

    /// Whether the table holds no overrides at all
    pub fn is_empty(&self) -> bool {
        self.languages.values().all(|overrides| overrides.exact.is_empty())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Literal, case-insensitive matcher for `term`. Word boundaries are only
/// asserted on edges where the term itself has a word character.
fn word_pattern(term: &str) -> Result<Regex, regex::Error> {
    let leading = if term.chars().next().is_some_and(is_word_char) { r"\b" } else { "" };
    let trailing = if term.chars().last().is_some_and(is_word_char) { r"\b" } else { "" };
    let pattern = format!("{}{}{}", leading, regex::escape(term), trailing);

    RegexBuilder::new(&pattern).case_insensitive(true).build()
}
