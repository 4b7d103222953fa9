//! Training data configuration from TOML (`[training]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TRAINING_PATH: &str = "training_data.json";

/// Raw training configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTrainingConfig {
    /// Path to the intents JSON file
    pub path: PathBuf,
}

impl Default for FileTrainingConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TRAINING_PATH),
        }
    }
}
