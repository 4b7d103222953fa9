//! Application layer for chat-solver
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResponderConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    rule_matcher::{NoRuleMatcher, RuleMatch, RuleMatcher},
    sentiment::{NeutralSentimentAnalyzer, SentimentAnalyzer, SentimentError},
    text_generator::{GenerationError, NoTextGenerator, TextGenerator},
};
pub use use_cases::respond::RespondUseCase;
pub use use_cases::solve_problem::SolveProblemUseCase;
