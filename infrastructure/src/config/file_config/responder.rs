//! Responder configuration from TOML (`[responder]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use solver_application::config::{
    DEFAULT_FALLBACK_RESPONSES, DEFAULT_GENERATION_MAX_LENGTH, DEFAULT_PROBLEM_KEYWORDS,
    DEFAULT_SIMILARITY_THRESHOLD, ResponderConfig,
};
use solver_domain::ResponderMode;

/// Raw responder configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResponderConfig {
    /// "solver" or "calculator"
    pub mode: String,
    pub problem_keywords: Vec<String>,
    pub similarity_threshold: f64,
    pub fallback_responses: Vec<String>,
    pub generation_max_length: usize,
}

impl Default for FileResponderConfig {
    fn default() -> Self {
        Self {
            mode: ResponderMode::default().to_string(),
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

impl FileResponderConfig {
    /// Parse the mode, falling back to the default on unknown values
    pub fn parse_mode(&self) -> (ResponderMode, Vec<ConfigIssue>) {
        match self.mode.parse::<ResponderMode>() {
            Ok(mode) => (mode, Vec::new()),
            Err(_) => (
                ResponderMode::default(),
                vec![ConfigIssue::new(
                    "responder.mode",
                    format!(
                        "unknown value '{}', falling back to '{}' (valid: solver, calculator)",
                        self.mode,
                        ResponderMode::default()
                    ),
                )],
            ),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_mode().1;

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            issues.push(ConfigIssue::new(
                "responder.similarity_threshold",
                format!(
                    "{} is outside [0, 1]; similarity scores never leave that range",
                    self.similarity_threshold
                ),
            ));
        }

        if self.fallback_responses.is_empty() {
            issues.push(ConfigIssue::new(
                "responder.fallback_responses",
                "empty list, the built-in fallback line will be used",
            ));
        }

        if self.generation_max_length == 0 {
            issues.push(ConfigIssue::new(
                "responder.generation_max_length",
                "must be at least 1 token",
            ));
        }

        issues
    }

    /// Convert to the application-layer config
    pub fn to_responder_config(&self) -> ResponderConfig {
        ResponderConfig::default()
            .with_mode(self.parse_mode().0)
            .with_problem_keywords(
                self.problem_keywords
                    .iter()
                    .map(|k| k.to_lowercase())
                    .collect(),
            )
            .with_similarity_threshold(self.similarity_threshold)
            .with_fallback_responses(self.fallback_responses.clone())
            .with_generation_max_length(self.generation_max_length)
    }
}
