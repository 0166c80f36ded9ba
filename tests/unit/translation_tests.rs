/*!
 * Tests for the translator capability
 */

use std::time::Duration;

use subsmith::subtitle_processor::render_srt;
use subsmith::translation::{EchoTranslator, OllamaTranslator, Translator};

use crate::common;

/// Echo returns its input unchanged, however often it is applied
#[tokio::test]
async fn test_echo_translate_withRepeatedApplication_shouldBeIdempotent() {
    let translator = EchoTranslator;
    let mut text = "Сайн байна уу".to_string();

    for _ in 0..5 {
        text = translator.translate(&text, Some("mn"), "en").await.unwrap();
    }

    assert_eq!(text, "Сайн байна уу");
}

/// Echo works with and without a source language hint
#[tokio::test]
async fn test_echo_translate_withMissingSourceHint_shouldStillEcho() {
    let translator = EchoTranslator;
    let out = translator.translate("hello", None, "fr").await.unwrap();
    assert_eq!(out, "hello");
}

/// A document built from echo-translated segments is byte-identical to the
/// document built from the originals
#[tokio::test]
async fn test_echo_translate_withSegmentSequence_shouldNotChangeDocument() {
    let translator = EchoTranslator;
    let segments = common::sample_segments();

    let mut translated = Vec::new();
    for segment in &segments {
        let text = translator
            .translate(&segment.text, None, "en")
            .await
            .unwrap();
        translated.push(segment.with_text(text));
    }

    assert_eq!(render_srt(&translated), render_srt(&segments));
}

/// Translation preserves sequence length and every segment's timing
#[tokio::test]
async fn test_echo_translate_withSegmentSequence_shouldPreserveTimings() {
    let translator = EchoTranslator;
    let segments = common::sample_segments();

    let mut translated = Vec::new();
    for segment in &segments {
        let text = translator
            .translate(&segment.text, None, "en")
            .await
            .unwrap();
        translated.push(segment.with_text(text));
    }

    assert_eq!(translated.len(), segments.len());
    for (before, after) in segments.iter().zip(&translated) {
        assert_eq!(before.start, after.start);
        assert_eq!(before.end, after.end);
    }
}

/// A malformed endpoint is rejected at construction time
#[test]
fn test_ollama_translator_withInvalidEndpoint_shouldFailConstruction() {
    let result = OllamaTranslator::new("not a url", "llama3.2:3b", Duration::from_secs(5));
    assert!(result.is_err());
}

/// A well-formed endpoint constructs without any network traffic
#[test]
fn test_ollama_translator_withValidEndpoint_shouldConstruct() {
    let result = OllamaTranslator::new(
        "http://localhost:11434",
        "llama3.2:3b",
        Duration::from_secs(5),
    );
    assert!(result.is_ok());
}
