//! Rule matcher port
//!
//! Finds the training intent closest to a message.

/// Best-scoring intent for a message
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    /// Canned responses of the matched intent
    pub responses: Vec<String>,
    /// Similarity in [0, 1]
    pub score: f64,
}

/// Similarity search over training patterns
///
/// Returns the best match regardless of score; the responder applies
/// the threshold.
pub trait RuleMatcher: Send + Sync {
    fn best_match(&self, text: &str) -> Option<RuleMatch>;
}

/// Matcher with no training data
pub struct NoRuleMatcher;

impl RuleMatcher for NoRuleMatcher {
    fn best_match(&self, _text: &str) -> Option<RuleMatch> {
        None
    }
}
