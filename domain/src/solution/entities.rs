//! Solution record returned by every handler

use crate::core::error::DomainError;
use crate::core::string::format_float;
use serde::{Deserialize, Serialize};

/// The `answer` field of a [`Solution`]: either text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Answer {
    /// Text answer, if this is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer answer, if this is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Answer::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Integer(n) => write!(f, "{}", n),
            Answer::Float(x) => write!(f, "{}", format_float(*x)),
            Answer::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Answer::Integer(n)
    }
}

impl From<f64> for Answer {
    fn from(x: f64) -> Self {
        Answer::Float(x)
    }
}

/// Kind of solution, reported in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionType {
    Arithmetic,
    Geometry,
    Mathematics,
    Physics,
    Programming,
    Time,
    Date,
    TimeDate,
    Conversion,
    Logic,
    Error,
}

impl SolutionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolutionType::Arithmetic => "arithmetic",
            SolutionType::Geometry => "geometry",
            SolutionType::Mathematics => "mathematics",
            SolutionType::Physics => "physics",
            SolutionType::Programming => "programming",
            SolutionType::Time => "time",
            SolutionType::Date => "date",
            SolutionType::TimeDate => "time_date",
            SolutionType::Conversion => "conversion",
            SolutionType::Logic => "logic",
            SolutionType::Error => "error",
        }
    }
}

impl std::fmt::Display for SolutionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured result of handling one query
///
/// Always present, never null: a handler that recognizes nothing still
/// returns a placeholder solution. Serializes to a flat mapping with the
/// optional fields omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub answer: Answer,
    pub explanation: String,
    #[serde(rename = "type")]
    pub kind: SolutionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Solution {
    pub fn new(answer: impl Into<Answer>, explanation: impl Into<String>, kind: SolutionType) -> Self {
        Self {
            answer: answer.into(),
            explanation: explanation.into(),
            kind,
            formula: None,
            language: None,
            details: None,
        }
    }

    /// The "Unable to solve" record produced when a calculation fails
    pub fn error(error: &DomainError) -> Self {
        Self::new(
            "Unable to solve",
            format!("Error in calculation: {}", error),
            SolutionType::Error,
        )
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == SolutionType::Error
    }
}
