use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::language_utils::Language;
use crate::providers::{VoiceConfig, google_translate, google_tts};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Path of the override document
    #[serde(default = "default_overrides_path")]
    pub overrides_path: String,

    /// Path of the compiled IPADIC dictionary (`.dic` or `.dic.zst`)
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: String,

    /// Google Cloud provider settings
    #[serde(default)]
    pub google: GoogleConfig,

    /// Speech synthesis voices
    #[serde(default)]
    pub voices: VoicesConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS. Empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Directory with the web UI, served for unmatched paths
    #[serde(default = "default_static_dir")]
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Google Cloud provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleConfig {
    /// API key for the Translation and Text-to-Speech APIs
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Translation endpoint URL
    #[serde(default = "default_translate_endpoint")]
    pub translate_endpoint: String,

    /// Text-to-Speech endpoint URL
    #[serde(default = "default_tts_endpoint")]
    pub tts_endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            translate_endpoint: default_translate_endpoint(),
            tts_endpoint: default_tts_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Voice used for each language that supports pronunciation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VoicesConfig {
    /// Japanese voice
    #[serde(default = "default_japanese_voice")]
    pub japanese: VoiceConfig,

    /// Korean voice
    #[serde(default = "default_korean_voice")]
    pub korean: VoiceConfig,
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            japanese: default_japanese_voice(),
            korean: default_korean_voice(),
        }
    }
}

impl VoicesConfig {
    /// Voice for a language, `None` when pronunciation is unsupported
    pub fn voice_for(&self, language: &Language) -> Option<&VoiceConfig> {
        match language {
            Language::Japanese => Some(&self.japanese),
            Language::Korean => Some(&self.korean),
            Language::English | Language::Other(_) => None,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> Option<String> {
    Some("public".to_string())
}

fn default_overrides_path() -> String {
    "overrides.json".to_string()
}

fn default_dictionary_path() -> String {
    "dict/system.dic.zst".to_string()
}

fn default_translate_endpoint() -> String {
    google_translate::DEFAULT_ENDPOINT.to_string()
}

fn default_tts_endpoint() -> String {
    google_tts::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_japanese_voice() -> VoiceConfig {
    VoiceConfig::new("ja-JP", "ja-JP-Neural2-B")
}

fn default_korean_voice() -> VoiceConfig {
    VoiceConfig::new("ko-KR", "ko-KR-Neural2-A")
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load a configuration file, writing the default one if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("Server port must be non-zero"));
        }

        if self.google.api_key.trim().is_empty() {
            return Err(anyhow!("Google API key is required (set google.api_key or GOOGLE_API_KEY)"));
        }

        for (name, endpoint) in [
            ("translate_endpoint", &self.google.translate_endpoint),
            ("tts_endpoint", &self.google.tts_endpoint),
        ] {
            if !endpoint.is_empty() {
                url::Url::parse(endpoint).map_err(|e| anyhow!("Invalid {} '{}': {}", name, endpoint, e))?;
            }
        }

        for origin in &self.server.allowed_origins {
            url::Url::parse(origin).map_err(|e| anyhow!("Invalid allowed origin '{}': {}", origin, e))?;
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            overrides_path: default_overrides_path(),
            dictionary_path: default_dictionary_path(),
            google: GoogleConfig::default(),
            voices: VoicesConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
