//! Training intents loaded from JSON.
//!
//! File shape:
//!
//! ```json
//! {"intents": [{"tag": "greeting", "patterns": ["hello"], "responses": ["Hi!"]}]}
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum TrainingDataError {
    #[error("Could not read training data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed training data {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One group of example phrasings sharing a set of replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingData {
    pub intents: Vec<Intent>,
}

impl TrainingData {
    /// Greeting intent used when no training file is usable
    pub fn builtin() -> Self {
        Self {
            intents: vec![Intent {
                tag: Some("greeting".to_string()),
                patterns: vec!["hello".into(), "hi".into(), "how are you".into()],
                responses: vec!["Hello!".into(), "Hi there!".into(), "Hey!".into()],
            }],
        }
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self, TrainingDataError> {
        serde_json::from_str(json).map_err(|source| TrainingDataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, TrainingDataError> {
        let json = std::fs::read_to_string(path).map_err(|source| TrainingDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Load the file, or fall back to [`TrainingData::builtin`] with a warning
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(data) => {
                info!(
                    "Loaded {} intents ({} patterns) from {}",
                    data.intents.len(),
                    data.pattern_count(),
                    path.display()
                );
                data
            }
            Err(e) => {
                warn!("{}. Using built-in greeting intent.", e);
                Self::builtin()
            }
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|i| i.patterns.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_maps_every_pattern_to_greetings() {
        let data = TrainingData::builtin();
        assert_eq!(data.intents.len(), 1);
        assert_eq!(data.pattern_count(), 3);
        assert_eq!(data.intents[0].responses, vec!["Hello!", "Hi there!", "Hey!"]);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"intents": [
                {{"tag": "thanks", "patterns": ["thank you", "thanks"], "responses": ["Any time!"]}},
                {{"patterns": ["bye"], "responses": ["Goodbye!", "See you!"]}}
            ]}}"#
        )
        .unwrap();

        let data = TrainingData::from_file(file.path()).unwrap();
        assert_eq!(data.intents.len(), 2);
        assert_eq!(data.intents[0].tag.as_deref(), Some("thanks"));
        assert!(data.intents[1].tag.is_none());
        assert_eq!(data.pattern_count(), 3);
    }

    #[test]
    fn test_missing_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        assert!(matches!(
            TrainingData::from_file(&path),
            Err(TrainingDataError::Io { .. })
        ));
        assert_eq!(TrainingData::load_or_builtin(&path), TrainingData::builtin());
    }

    #[test]
    fn test_malformed_file_uses_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"intents": "not a list"}}"#).unwrap();

        assert!(matches!(
            TrainingData::from_file(file.path()),
            Err(TrainingDataError::Parse { .. })
        ));
        assert_eq!(
            TrainingData::load_or_builtin(file.path()),
            TrainingData::builtin()
        );
    }
}
