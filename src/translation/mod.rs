/*!
 * Translation of user text with overrides and romanization.
 *
 * - `core`: the translation orchestrator and its result type
 */

// Re-export main types for easier usage
pub use self::core::{ANALYZER_NOT_READY, RomanizationPlan, TranslationResult, TranslationService};

// Submodules
pub mod core;
