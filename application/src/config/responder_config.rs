//! Responder configuration.
//!
//! [`ResponderConfig`] controls the chat cascade: which problem path runs,
//! the words that trigger it, the rule-match threshold and the canned
//! fallback lines.

use serde::{Deserialize, Serialize};
use solver_domain::ResponderMode;

/// Words that send a chat message to the problem solver
pub const DEFAULT_PROBLEM_KEYWORDS: &[&str] =
    &["solve", "calculate", "what is", "how to", "why does", "explain"];

/// Replies used when every other stage comes up empty
pub const DEFAULT_FALLBACK_RESPONSES: &[&str] = &[
    "I'm still learning. Can you rephrase that?",
    "That's interesting! Tell me more.",
    "I'm not sure I understand. Could you explain differently?",
    "Let me think about that... Actually, could you ask me something else?",
    "I'm constantly learning! Could you provide more context?",
];

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_GENERATION_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderConfig {
    pub mode: ResponderMode,
    /// Lowercase substrings; any hit routes to the solver
    pub problem_keywords: Vec<String>,
    /// A rule match needs a score strictly above this
    pub similarity_threshold: f64,
    pub fallback_responses: Vec<String>,
    pub generation_max_length: usize,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            mode: ResponderMode::default(),
            problem_keywords: DEFAULT_PROBLEM_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            fallback_responses: DEFAULT_FALLBACK_RESPONSES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            generation_max_length: DEFAULT_GENERATION_MAX_LENGTH,
        }
    }
}

impl ResponderConfig {
    // ==================== Builder Methods ====================

    pub fn with_mode(mut self, mode: ResponderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_problem_keywords(mut self, keywords: Vec<String>) -> Self {
        self.problem_keywords = keywords;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_fallback_responses(mut self, responses: Vec<String>) -> Self {
        self.fallback_responses = responses;
        self
    }

    pub fn with_generation_max_length(mut self, max: usize) -> Self {
        self.generation_max_length = max;
        self
    }

    /// Whether the lowercased message contains a problem keyword
    pub fn is_problem(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.problem_keywords
            .iter()
            .any(|k| lower.contains(k.to_lowercase().as_str()))
    }
}
