//! Sentiment analysis port
//!
//! Defines the interface for labelling the mood of a chat message.

use async_trait::async_trait;
use solver_domain::Sentiment;
use thiserror::Error;

/// Errors that can occur while analyzing sentiment
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Sentiment model not available")]
    Unavailable,

    #[error("Analysis failed: {0}")]
    Failed(String),
}

/// Analyzer that labels a message POSITIVE, NEGATIVE or NEUTRAL
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Sentiment, SentimentError>;
}

/// Analyzer that reports every message as neutral
pub struct NeutralSentimentAnalyzer;

#[async_trait]
impl SentimentAnalyzer for NeutralSentimentAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<Sentiment, SentimentError> {
        Ok(Sentiment::neutral())
    }
}
