use anyhow::{Result, anyhow};
use isolang::Language as IsoLanguage;

/// Language utilities for request language codes
///
/// Requests carry free-form codes (`ja`, `ko`, `en`, `zh-CN`, ...). Only three of
/// them change how a translation is romanized, so they are parsed into a closed
/// enumeration and everything else is kept verbatim for the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    /// Japanese (`ja`)
    Japanese,
    /// Korean (`ko`)
    Korean,
    /// English (`en`)
    English,
    /// Any other code, as sent by the client
    Other(String),
}

impl Language {
    /// Parse a request language code. Returns `None` for empty input.
    ///
    /// `ja`, `ko` and `en` match case-insensitively; any other code is kept
    /// as sent (minus surrounding whitespace) so the provider sees it unchanged.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }

        let language = if code.eq_ignore_ascii_case("ja") {
            Self::Japanese
        } else if code.eq_ignore_ascii_case("ko") {
            Self::Korean
        } else if code.eq_ignore_ascii_case("en") {
            Self::English
        } else {
            Self::Other(code.to_string())
        };
        Some(language)
    }

    /// The code sent to the providers
    pub fn code(&self) -> &str {
        match self {
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::English => "en",
            Self::Other(code) => code,
        }
    }

    /// Human readable name, falling back to the raw code
    pub fn display_name(&self) -> String {
        get_language_name(self.code()).unwrap_or_else(|_| self.code().to_string())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Normalize a language code to ISO 639-3 format. Region subtags such as
/// `zh-CN` are stripped before lookup.
pub fn normalize_to_part3(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();
    let primary = normalized_code
        .split(['-', '_'])
        .next()
        .unwrap_or_default();

    let lang = match primary.len() {
        2 => IsoLanguage::from_639_1(primary),
        3 => IsoLanguage::from_639_3(primary),
        _ => None,
    };

    lang.map(|l| l.to_639_3().to_string())
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part3(code)?;
    let lang = IsoLanguage::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}
