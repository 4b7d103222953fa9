//! Ollama text generator.
//!
//! Implements [`TextGenerator`] against a local Ollama instance using the
//! non-streaming `/api/generate` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use solver_application::ports::text_generator::{GenerationError, TextGenerator};
use tracing::debug;

pub struct OllamaTextGenerator {
    client: Client,
    api_base: String,
    model: String,
}

/// Request body for `/api/generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    options: GenerateOptions,
    /// Disable streaming to get a single response object.
    stream: bool,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    num_predict: usize,
}

/// Response from `/api/generate` (non-streaming).
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaTextGenerator {
    pub fn with_base_url(model: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.api_base)
    }

    fn request<'a>(&'a self, prompt: &'a str, max_length: usize) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            options: GenerateOptions {
                num_predict: max_length,
            },
            stream: false,
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaTextGenerator {
    async fn generate(&self, text: &str, max_length: usize) -> Result<String, GenerationError> {
        debug!("Ollama generate: model {}, num_predict {}", self.model, max_length);

        let response = self
            .client
            .post(self.endpoint())
            .json(&self.request(text, max_length))
            .send()
            .await
            .map_err(|e| GenerationError::ConnectionError(format!("Ollama HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::RequestFailed(format!(
                "Ollama API error (HTTP {status}): {body}"
            )));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            GenerationError::RequestFailed(format!("Failed to parse Ollama response: {e}"))
        })?;

        let text = body.response.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
