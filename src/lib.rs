/*!
 * # yomiyaku - translation with readings
 *
 * A Rust library and web service that translates short phrases through a
 * machine translation provider and returns a romanized reading for Japanese
 * and Korean text.
 *
 * ## Features
 *
 * - Curated overrides that replace or patch provider translations
 * - Japanese readings with particle corrections (は as "wa", へ as "e")
 * - Korean Revised Romanization
 * - Japanese and Korean pronunciation audio
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `overrides`: Custom phrase and word overrides
 * - `romanization`: Readings and romanization:
 *   - `romanization::tokenizer`: Morphological tokenizer and dictionary loading
 *   - `romanization::japanese`: Japanese reading reconstruction
 *   - `romanization::kana`: Kana conversion
 *   - `romanization::korean`: Korean romanization
 * - `translation`: The translation orchestrator
 * - `speech`: Pronunciation requests
 * - `providers`: Client implementations for the external services
 * - `server`: HTTP API
 * - `app_controller`: Application wiring
 * - `language_utils`: Language codes
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod overrides;
pub mod providers;
pub mod romanization;
pub mod server;
pub mod speech;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, ReadingError, SpeechError, TranslationError};
pub use language_utils::Language;
pub use overrides::OverrideTable;
pub use translation::{TranslationResult, TranslationService};
