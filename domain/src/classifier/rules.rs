//! Keyword cascade that picks a [`HandlerCategory`]
//!
//! The rule table is evaluated top to bottom and the first rule with a
//! keyword contained in the lowercased query wins. Precedence is the table
//! order, not keyword specificity: "what is" sits in the math rule, so
//! "what is the current time" is routed to math before the time/date rule is
//! ever consulted. Queries no rule claims fall back to [`HandlerCategory::Logic`].

use super::category::HandlerCategory;

/// Ordered (category, trigger words) pairs
pub const CLASSIFICATION_RULES: &[(HandlerCategory, &[&str])] = &[
    (
        HandlerCategory::Math,
        &["calculate", "solve", "what is", "how much", "math", "equation"],
    ),
    (
        HandlerCategory::Physics,
        &["velocity", "acceleration", "force", "energy", "physics"],
    ),
    (
        HandlerCategory::Programming,
        &["code", "program", "function", "algorithm", "python", "javascript"],
    ),
    (
        HandlerCategory::TimeDate,
        &["time", "date", "day", "week", "month", "year"],
    ),
    (
        HandlerCategory::Conversion,
        &["convert", "feet to meters", "celsius to fahrenheit"],
    ),
];

/// Category used when no rule matches
pub const FALLBACK_CATEGORY: HandlerCategory = HandlerCategory::Logic;

/// Outcome of classification, with the keyword that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: HandlerCategory,
    /// `None` when the fallback category was used
    pub keyword: Option<&'static str>,
}

/// Stateless classifier over [`CLASSIFICATION_RULES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Pick exactly one category for the query
    pub fn classify(&self, query: &str) -> HandlerCategory {
        self.explain(query).category
    }

    /// Classify and report which trigger word fired
    pub fn explain(&self, query: &str) -> Classification {
        let lower = query.to_lowercase();
        CLASSIFICATION_RULES
            .iter()
            .find_map(|(category, keywords)| {
                keywords
                    .iter()
                    .find(|kw| lower.contains(**kw))
                    .map(|kw| Classification {
                        category: *category,
                        keyword: Some(*kw),
                    })
            })
            .unwrap_or(Classification {
                category: FALLBACK_CATEGORY,
                keyword: None,
            })
    }
}
