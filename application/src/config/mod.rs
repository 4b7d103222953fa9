//! Application-level configuration.
//!
//! - [`ResponderConfig`]: chat cascade control (mode, keywords, threshold, fallbacks)

pub mod responder_config;

pub use responder_config::{
    DEFAULT_FALLBACK_RESPONSES, DEFAULT_GENERATION_MAX_LENGTH, DEFAULT_PROBLEM_KEYWORDS,
    DEFAULT_SIMILARITY_THRESHOLD, ResponderConfig,
};
