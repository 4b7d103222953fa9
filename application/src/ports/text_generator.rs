//! Text generation port
//!
//! Open-ended reply generation used when no rule matches.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generator not configured")]
    Unavailable,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response")]
    EmptyResponse,
}

/// Generator producing a free-text continuation of the user's message
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply of at most `max_length` tokens
    async fn generate(&self, text: &str, max_length: usize) -> Result<String, GenerationError>;

    /// Name reported in logs
    fn name(&self) -> &str;
}

/// Generator used when no model is configured; always unavailable
pub struct NoTextGenerator;

#[async_trait]
impl TextGenerator for NoTextGenerator {
    async fn generate(&self, _text: &str, _max_length: usize) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable)
    }

    fn name(&self) -> &str {
        "none"
    }
}
