//! Infrastructure layer for chat-solver
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod generator;
pub mod intents;
pub mod logging;
pub mod matching;
pub mod sentiment;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGeneratorConfig, FileOutputConfig, FileReplConfig,
    FileResponderConfig, FileTrainingConfig,
};
#[cfg(feature = "ollama")]
pub use generator::OllamaTextGenerator;
pub use generator::build_generator;
pub use intents::{Intent, TrainingData, TrainingDataError};
pub use logging::JsonlConversationLogger;
pub use matching::TfIdfRuleMatcher;
pub use sentiment::LexiconSentimentAnalyzer;
