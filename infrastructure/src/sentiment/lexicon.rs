//! Keyword-lexicon sentiment analyzer.
//!
//! Counts hits from two word lists. The side with more hits sets the label;
//! confidence is `0.5 + 0.5 × margin / total`, so a unanimous message scores
//! 1.0 and a split one stays near 0.5. No hits, or a tie, is NEUTRAL at 0.5.

use async_trait::async_trait;
use solver_application::ports::sentiment::{SentimentAnalyzer, SentimentError};
use solver_domain::Sentiment;

pub const POSITIVE_LABEL: &str = "POSITIVE";
pub const NEGATIVE_LABEL: &str = "NEGATIVE";

// ── Keyword tables ──────────────────────────────────────────────────────

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "awesome",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "like",
    "happy",
    "glad",
    "thanks",
    "thank",
    "nice",
    "perfect",
    "cool",
    "brilliant",
    "enjoy",
    "helpful",
    "best",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "dislike",
    "sad",
    "angry",
    "annoyed",
    "upset",
    "wrong",
    "broken",
    "worst",
    "useless",
    "stupid",
    "boring",
    "confused",
    "frustrated",
    "disappointed",
    "fail",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentimentAnalyzer;

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous classification used by the async port
    pub fn classify(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .collect();

        let positive = words.iter().filter(|w| POSITIVE_WORDS.contains(*w)).count();
        let negative = words.iter().filter(|w| NEGATIVE_WORDS.contains(*w)).count();

        let total = positive + negative;
        if total == 0 || positive == negative {
            return Sentiment::neutral();
        }

        let margin = positive.abs_diff(negative) as f64;
        let score = (0.5 + 0.5 * margin / total as f64).clamp(0.5, 1.0);
        let label = if positive > negative {
            POSITIVE_LABEL
        } else {
            NEGATIVE_LABEL
        };
        Sentiment::new(label, score)
    }
}

#[async_trait]
impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Sentiment, SentimentError> {
        Ok(self.classify(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        let s = LexiconSentimentAnalyzer::new().classify("This is great, thanks!");
        assert_eq!(s.label, "POSITIVE");
        assert_eq!(s.score, 1.0);
    }

    #[test]
    fn test_negative() {
        let s = LexiconSentimentAnalyzer::new().classify("That answer was WRONG and useless");
        assert_eq!(s.label, "NEGATIVE");
        assert_eq!(s.score, 1.0);
    }

    #[test]
    fn test_mixed_margin() {
        // two positive, one negative: 0.5 + 0.5 * 1/3
        let s = LexiconSentimentAnalyzer::new().classify("good and nice but a bad day");
        assert_eq!(s.label, "POSITIVE");
        assert!((s.score - (0.5 + 0.5 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_when_no_hits_or_tie() {
        let analyzer = LexiconSentimentAnalyzer::new();
        assert_eq!(analyzer.classify("what is 2 + 3"), Sentiment::neutral());
        assert_eq!(analyzer.classify("good bad"), Sentiment::neutral());
    }

    #[test]
    fn test_whole_words_only() {
        // "goodbye" is not "good"
        let s = LexiconSentimentAnalyzer::new().classify("goodbye");
        assert_eq!(s, Sentiment::neutral());
    }

    #[tokio::test]
    async fn test_port_never_fails() {
        let s = LexiconSentimentAnalyzer::new().analyze("I love it").await.unwrap();
        assert_eq!(s.label, "POSITIVE");
    }
}
