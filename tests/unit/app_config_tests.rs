/*!
 * Tests for application configuration
 */

use subsmith::app_config::{Config, LogLevel, TranslationProvider};

use crate::common;

/// Defaults produce a valid configuration
#[test]
fn test_config_default_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.source_language, "auto");
    assert_eq!(config.target_language, "en");
    assert_eq!(config.translation.provider, TranslationProvider::Echo);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// The auto sentinel is only legal as a source language
#[test]
fn test_config_validate_withAutoTarget_shouldReject() {
    let mut config = Config::default();
    config.target_language = "auto".to_string();
    assert!(config.validate().is_err());
}

/// Unknown language codes are rejected
#[test]
fn test_config_validate_withInvalidLanguages_shouldReject() {
    let mut config = Config::default();
    config.source_language = "zz".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.target_language = "klingon".to_string();
    assert!(config.validate().is_err());
}

/// Zero timeouts are rejected
#[test]
fn test_config_validate_withZeroTimeout_shouldReject() {
    let mut config = Config::default();
    config.media.timeout_secs = 0;
    assert!(config.validate().is_err());
}

/// Partial JSON files fill the rest from defaults
#[test]
fn test_config_from_file_withPartialJson_shouldUseDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"target_language": "mn", "translation": {"provider": "ollama"}}"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.source_language, "auto");
    assert_eq!(config.target_language, "mn");
    assert_eq!(config.translation.provider, TranslationProvider::Ollama);
    assert_eq!(config.translation.model, "llama3.2:3b");
    assert_eq!(config.media.binary, "ffmpeg");
}

/// Save-then-load round-trips the configuration
#[test]
fn test_config_save_withRoundTrip_shouldPreserveFields() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.target_language = "fr".to_string();
    config.transcription.model = "models/ggml-large.bin".to_string();
    config.save(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.target_language, "fr");
    assert_eq!(loaded.transcription.model, "models/ggml-large.bin");
}

/// A missing file is replaced by a persisted default config
#[test]
fn test_config_from_file_or_default_withMissingFile_shouldCreateDefault() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let config = Config::from_file_or_default(&path).unwrap();

    assert!(path.is_file());
    assert_eq!(config.target_language, Config::default().target_language);
}

/// Malformed JSON is a load error, not a panic
#[test]
fn test_config_from_file_withMalformedJson_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{not json").unwrap();
    assert!(Config::from_file(&path).is_err());
}
