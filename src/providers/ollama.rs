use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::TranslationError;

/// Client for a local Ollama server's generate endpoint
#[derive(Debug, Clone)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: Url,
    /// HTTP client for making requests
    client: Client,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    /// Model name to use for generation
    model: String,
    /// Prompt to generate from
    prompt: String,
    /// System message to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Whether to stream the response
    stream: bool,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        GenerationRequest {
            model: model.into(),
            prompt: prompt.into(),
            system: None,
            stream: false,
        }
    }

    /// Set the system message
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Generation response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    /// Generated text
    pub response: String,
    /// Whether the generation is complete
    pub done: bool,
}

impl Ollama {
    /// Create a client for the given endpoint, e.g. `http://localhost:11434`
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TranslationError> {
        let base_url = Url::parse(endpoint).map_err(|e| {
            TranslationError::RequestFailed(format!("invalid endpoint {}: {}", endpoint, e))
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::RequestFailed(e.to_string()))?;

        Ok(Ollama { base_url, client })
    }

    /// Run a single non-streaming generation
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, TranslationError> {
        let url = self
            .base_url
            .join("api/generate")
            .map_err(|e| TranslationError::RequestFailed(e.to_string()))?;

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::Backend {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|e| TranslationError::ParseError(e.to_string()))
    }
}
