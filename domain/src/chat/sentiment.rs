//! Sentiment value object

use serde::{Deserialize, Serialize};

/// Label and confidence reported by a sentiment model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: String,
    pub score: f64,
}

impl Sentiment {
    pub const NEUTRAL_LABEL: &'static str = "NEUTRAL";

    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// What is reported when no model is available or the model fails
    pub fn neutral() -> Self {
        Self::new(Self::NEUTRAL_LABEL, 0.5)
    }

    /// Score rounded to two decimals
    pub fn rounded_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_default() {
        let s = Sentiment::default();
        assert_eq!(s.label, "NEUTRAL");
        assert_eq!(s.score, 0.5);
    }

    #[test]
    fn test_rounded_score() {
        assert_eq!(Sentiment::new("POSITIVE", 0.98765).rounded_score(), 0.99);
        assert_eq!(Sentiment::new("NEGATIVE", 0.5).rounded_score(), 0.5);
    }
}
