/*!
 * Translation capability boundary.
 *
 * The pipeline only depends on the one-method `Translator` trait. The echo
 * implementation is the default and doubles as a smoke-test stand-in;
 * `OllamaTranslator` talks to a local LLM server.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::errors::TranslationError;
use crate::providers::ollama::{GenerationRequest, Ollama};

/// Capability of turning text in one language into text in another.
///
/// Implementations must be pure with respect to the pipeline (no shared-state
/// mutation) but may be slow or fail; the pipeline never retries a call.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang`.
    ///
    /// `source_lang` is `None` when the source language is unknown and should
    /// be inferred. The output is not required to differ from the input.
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String, TranslationError>;
}

/// Translator that returns its input unchanged.
///
/// Safe default when no backend is configured, and a network-free stand-in
/// for pipeline smoke tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: Option<&str>,
        _target_lang: &str,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

/// Translator backed by a local Ollama model
pub struct OllamaTranslator {
    client: Ollama,
    model: String,
}

impl OllamaTranslator {
    pub fn new(
        endpoint: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TranslationError> {
        Ok(OllamaTranslator {
            client: Ollama::new(endpoint, timeout)?,
            model: model.into(),
        })
    }

    fn build_prompt(text: &str, source_lang: Option<&str>, target_lang: &str) -> String {
        match source_lang {
            Some(source) => format!(
                "Translate the following subtitle line from {} to {}. \
                 Reply with the translation only, no quotes or commentary.\n\n{}",
                source, target_lang, text
            ),
            None => format!(
                "Translate the following subtitle line to {}. \
                 Reply with the translation only, no quotes or commentary.\n\n{}",
                target_lang, text
            ),
        }
    }
}

#[async_trait]
impl Translator for OllamaTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        let prompt = Self::build_prompt(text, source_lang, target_lang);
        let request = GenerationRequest::new(self.model.as_str(), prompt)
            .system("You are a professional subtitle translator.");

        let response = self.client.generate(request).await?;
        let translated = response.response.trim().to_string();
        if translated.is_empty() {
            return Err(TranslationError::EmptyResult);
        }

        debug!(
            "Translated {} chars into {} chars",
            text.len(),
            translated.len()
        );
        Ok(translated)
    }
}
