//! Problem query value object

use serde::{Deserialize, Serialize};

/// The user's raw text, handed to the classifier and handlers unchanged (Value Object)
///
/// Nothing is normalized on construction; each check lowercases on its own.
/// [`ProblemQuery::new`] accepts any text, including blank input, because
/// rejecting empty messages is the job of the surface that received them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemQuery {
    content: String,
}

impl ProblemQuery {
    /// Create a new query from raw text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Try to create a new query, returning None if the text is blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the raw query text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lowercased copy used for keyword checks
    pub fn lowercase(&self) -> String {
        self.content.to_lowercase()
    }
}

impl std::fmt::Display for ProblemQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for ProblemQuery {
    fn from(s: &str) -> Self {
        ProblemQuery::new(s)
    }
}

impl From<String> for ProblemQuery {
    fn from(s: String) -> Self {
        ProblemQuery::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keeps_original_case() {
        let q = ProblemQuery::new("What is 2+3");
        assert_eq!(q.content(), "What is 2+3");
        assert_eq!(q.lowercase(), "what is 2+3");
    }

    #[test]
    fn test_blank_query_is_allowed_by_new() {
        assert_eq!(ProblemQuery::new("").content(), "");
    }

    #[test]
    fn test_try_new_rejects_blank() {
        assert!(ProblemQuery::try_new("").is_none());
        assert!(ProblemQuery::try_new("   ").is_none());
        assert!(ProblemQuery::try_new("riddle").is_some());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProblemQuery::from("hi")).unwrap();
        assert_eq!(json, "\"hi\"");
    }
}
