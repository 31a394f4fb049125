use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::app_config::Config;
use crate::overrides::OverrideTable;
use crate::providers::google_translate::GoogleTranslate;
use crate::providers::google_tts::GoogleTts;
use crate::providers::{SpeechSynthesizer, TextTranslator};
use crate::romanization::{DictionaryTokenizer, ReadingReconstructor, TokenizerHandle};
use crate::server::{self, AppState};
use crate::speech::SpeechService;
use crate::translation::TranslationService;

// @module: Application controller wiring configuration, providers and server

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Shared tokenizer slot, filled by `load_dictionary`
    tokenizer: Arc<TokenizerHandle>,
    // @field: Handler state
    state: Arc<AppState>,
}

impl Controller {
    // @method: Create a controller talking to the Google Cloud APIs
    pub fn with_config(config: Config) -> Result<Self> {
        let translator = Arc::new(GoogleTranslate::new(
            config.google.api_key.clone(),
            config.google.translate_endpoint.clone(),
            config.google.timeout_secs,
        ));
        let speech = Arc::new(GoogleTts::new(
            config.google.api_key.clone(),
            config.google.tts_endpoint.clone(),
            config.google.timeout_secs,
        ));

        let overrides = OverrideTable::from_file(&config.overrides_path)
            .context(format!("Failed to load overrides from {}", config.overrides_path))?;

        Ok(Self::with_providers(config, overrides, translator, speech))
    }

    // @method: Create a controller with explicit collaborators
    pub fn with_providers(
        config: Config,
        overrides: OverrideTable,
        translator: Arc<dyn TextTranslator>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        for language in overrides.languages() {
            info!("Loaded {} overrides for '{}'", overrides.len(language), language);
        }

        let tokenizer = Arc::new(TokenizerHandle::new());
        let reader = ReadingReconstructor::new(Arc::clone(&tokenizer));

        let state = Arc::new(AppState {
            translation: TranslationService::new(Arc::new(overrides), translator, reader),
            speech: SpeechService::new(speech, config.voices.clone()),
        });

        Self {
            config,
            tokenizer,
            state,
        }
    }

    /// Handler state, shared with the router
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Shared tokenizer slot
    pub fn tokenizer(&self) -> Arc<TokenizerHandle> {
        Arc::clone(&self.tokenizer)
    }

    /// Build the configured dictionary on a blocking thread and install it
    pub async fn load_dictionary(&self) -> Result<()> {
        let path = self.config.dictionary_path.clone();
        info!("Building Japanese analyzer from {}", path);

        let tokenizer = tokio::task::spawn_blocking(move || DictionaryTokenizer::build(path))
            .await
            .context("Dictionary build task panicked")?
            .context("Japanese analyzer initialization failed")?;

        self.tokenizer
            .install(Arc::new(tokenizer))
            .context("Japanese analyzer was already initialized")?;

        info!("Japanese analyzer initialized.");
        Ok(())
    }

    /// Serve the HTTP API until shutdown
    pub async fn run(&self) -> Result<()> {
        let router = server::build_router(self.state(), &self.config.server);
        server::serve(router, &self.config.server).await
    }
}
