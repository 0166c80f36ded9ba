use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::file_utils::FileManager;
use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO 639), or "auto" for engine detection
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO 639)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation backend settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Speech recognition engine settings
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Media tool settings
    #[serde(default)]
    pub media: MediaConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_source_language() -> String {
    "auto".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: Pass text through unchanged
    #[default]
    Echo,
    // @provider: Local Ollama server
    Ollama,
}

impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Echo => write!(f, "echo"),
            Self::Ollama => write!(f, "ollama"),
        }
    }
}

/// Translation backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    // @field: Provider selection
    #[serde(default)]
    pub provider: TranslationProvider,

    // @field: Model name (provider-specific)
    #[serde(default = "default_translation_model")]
    pub model: String,

    // @field: Service URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    // @field: Per-request timeout in seconds
    #[serde(default = "default_translation_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        TranslationConfig {
            provider: TranslationProvider::default(),
            model: default_translation_model(),
            endpoint: default_translation_endpoint(),
            timeout_secs: default_translation_timeout_secs(),
        }
    }
}

fn default_translation_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_translation_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_translation_timeout_secs() -> u64 {
    30
}

/// Speech recognition engine configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranscriptionConfig {
    // @field: whisper.cpp CLI binary
    #[serde(default = "default_whisper_binary")]
    pub binary: String,

    // @field: Path to the ggml model file
    #[serde(default = "default_whisper_model")]
    pub model: String,

    // @field: Whole-transcription timeout in seconds
    #[serde(default = "default_transcription_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        TranscriptionConfig {
            binary: default_whisper_binary(),
            model: default_whisper_model(),
            timeout_secs: default_transcription_timeout_secs(),
        }
    }
}

fn default_whisper_binary() -> String {
    "whisper-cli".to_string()
}

fn default_whisper_model() -> String {
    "models/ggml-small.bin".to_string()
}

fn default_transcription_timeout_secs() -> u64 {
    900
}

/// Media tool configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MediaConfig {
    // @field: ffmpeg binary
    #[serde(default = "default_ffmpeg_binary")]
    pub binary: String,

    // @field: Per-invocation timeout in seconds
    #[serde(default = "default_media_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        MediaConfig {
            binary: default_ffmpeg_binary(),
            timeout_secs: default_media_timeout_secs(),
        }
    }
}

fn default_ffmpeg_binary() -> String {
    "ffmpeg".to_string()
}

fn default_media_timeout_secs() -> u64 {
    300
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
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
    /// Convert to the log crate's filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            transcription: TranscriptionConfig::default(),
            media: MediaConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, creating it with defaults when missing
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if FileManager::file_exists(&path) {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save(&path)?;
            Ok(config)
        }
    }

    /// Persist the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        FileManager::write_to_file(path, &content)
    }

    /// Check language codes and timeouts
    pub fn validate(&self) -> Result<()> {
        if !language_utils::is_auto(&self.source_language) {
            language_utils::validate_language_code(&self.source_language)?;
        }
        if language_utils::is_auto(&self.target_language) {
            return Err(anyhow!("target language cannot be 'auto'"));
        }
        language_utils::validate_language_code(&self.target_language)?;
        // The soft-mux track tag needs a three-letter form of the target.
        language_utils::normalize_to_part2t(&self.target_language)?;

        if self.translation.timeout_secs == 0
            || self.transcription.timeout_secs == 0
            || self.media.timeout_secs == 0
        {
            return Err(anyhow!("timeouts must be greater than zero"));
        }
        Ok(())
    }
}
