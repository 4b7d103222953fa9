//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generator;
mod output;
mod repl;
mod responder;
mod training;

pub use generator::{DEFAULT_OLLAMA_BASE, FileGeneratorConfig};
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use responder::FileResponderConfig;
pub use training::{DEFAULT_TRAINING_PATH, FileTrainingConfig};

use serde::{Deserialize, Serialize};

/// A non-fatal problem found in the loaded configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    /// Dotted key, e.g. `responder.mode`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat cascade settings
    pub responder: FileResponderConfig,
    /// Training data location
    pub training: FileTrainingConfig,
    /// Optional text generator
    pub generator: FileGeneratorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.responder.validate());
        issues.extend(self.generator.validate());
        issues
    }

    /// Render the effective configuration as TOML (for --show-config)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
