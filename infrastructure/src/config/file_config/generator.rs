//! Text generator configuration from TOML (`[generator]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};

const VALID_PROVIDERS: &[&str] = &["none", "ollama"];

/// Default Ollama API base URL for local instances
pub const DEFAULT_OLLAMA_BASE: &str = "http://localhost:11434";

/// Raw generator configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// "none" or "ollama"
    pub provider: String,
    /// Model name passed to the provider
    pub model: String,
    pub base_url: String,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            provider: "none".to_string(),
            model: "llama3.2".to_string(),
            base_url: DEFAULT_OLLAMA_BASE.to_string(),
        }
    }
}

impl FileGeneratorConfig {
    /// Lowercased provider name
    pub fn provider(&self) -> String {
        self.provider.to_lowercase()
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if VALID_PROVIDERS.contains(&self.provider().as_str()) {
            return Vec::new();
        }
        vec![ConfigIssue::new(
            "generator.provider",
            format!(
                "unknown value '{}', generation disabled (valid: {})",
                self.provider,
                VALID_PROVIDERS.join(", ")
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_provider() {
        assert!(FileGeneratorConfig::default().validate().is_empty());

        let config = FileGeneratorConfig {
            provider: "Ollama".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_empty());

        let config = FileGeneratorConfig {
            provider: "dialogpt".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("dialogpt"));
    }
}
