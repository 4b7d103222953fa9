//! Chat reply produced by the responder

use super::sentiment::Sentiment;
use crate::solution::{Solution, SolutionType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which responder stage produced a reply
///
/// Serialized as a flat string: `problem_solution_<type>`, `rule_based`,
/// `ai_generated` or `fallback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    ProblemSolution(SolutionType),
    RuleBased,
    AiGenerated,
    Fallback,
}

const PROBLEM_PREFIX: &str = "problem_solution_";

impl std::fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplyKind::ProblemSolution(kind) => write!(f, "{}{}", PROBLEM_PREFIX, kind),
            ReplyKind::RuleBased => write!(f, "rule_based"),
            ReplyKind::AiGenerated => write!(f, "ai_generated"),
            ReplyKind::Fallback => write!(f, "fallback"),
        }
    }
}

impl std::str::FromStr for ReplyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rule_based" => Ok(ReplyKind::RuleBased),
            "ai_generated" => Ok(ReplyKind::AiGenerated),
            "fallback" => Ok(ReplyKind::Fallback),
            s => {
                let kind = s
                    .strip_prefix(PROBLEM_PREFIX)
                    .ok_or_else(|| format!("Unknown reply type: {}", s))?;
                let kind: SolutionType = serde_json::from_value(serde_json::Value::String(
                    kind.to_string(),
                ))
                .map_err(|_| format!("Unknown solution type in reply type: {}", s))?;
                Ok(ReplyKind::ProblemSolution(kind))
            }
        }
    }
}

impl Serialize for ReplyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ReplyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One chat turn's answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub sentiment: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_details: Option<Solution>,
}

impl ChatReply {
    pub fn new(response: impl Into<String>, kind: ReplyKind, sentiment: &Sentiment) -> Self {
        Self {
            response: response.into(),
            kind,
            sentiment: sentiment.label.clone(),
            confidence: sentiment.rounded_score(),
            solution_details: None,
        }
    }

    /// Reply that presents a solver result
    pub fn from_solution(solution: Solution, sentiment: &Sentiment) -> Self {
        let response = format!("🤔 {}\n💡 {}", solution.answer, solution.explanation);
        let kind = ReplyKind::ProblemSolution(solution.kind);
        Self {
            solution_details: Some(solution),
            ..Self::new(response, kind, sentiment)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_kind_strings() {
        assert_eq!(
            ReplyKind::ProblemSolution(SolutionType::Arithmetic).to_string(),
            "problem_solution_arithmetic"
        );
        assert_eq!(
            ReplyKind::ProblemSolution(SolutionType::TimeDate).to_string(),
            "problem_solution_time_date"
        );
        assert_eq!(ReplyKind::RuleBased.to_string(), "rule_based");
    }

    #[test]
    fn test_reply_kind_parse() {
        assert_eq!(
            "problem_solution_geometry".parse::<ReplyKind>(),
            Ok(ReplyKind::ProblemSolution(SolutionType::Geometry))
        );
        assert_eq!("fallback".parse::<ReplyKind>(), Ok(ReplyKind::Fallback));
        assert!("problem_solution_chemistry".parse::<ReplyKind>().is_err());
        assert!("unknown".parse::<ReplyKind>().is_err());
    }

    #[test]
    fn test_from_solution_formats_response() {
        let solution = Solution::new(5, "Addition: 2 + 3 = 5", SolutionType::Arithmetic);
        let reply = ChatReply::from_solution(solution, &Sentiment::new("POSITIVE", 0.876));
        assert_eq!(reply.response, "🤔 5\n💡 Addition: 2 + 3 = 5");
        assert_eq!(reply.kind, ReplyKind::ProblemSolution(SolutionType::Arithmetic));
        assert_eq!(reply.sentiment, "POSITIVE");
        assert_eq!(reply.confidence, 0.88);
        assert!(reply.solution_details.is_some());
    }

    #[test]
    fn test_serialize_reply() {
        let reply = ChatReply::new("Hello!", ReplyKind::RuleBased, &Sentiment::neutral());
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["type"], "rule_based");
        assert_eq!(value["sentiment"], "NEUTRAL");
        assert_eq!(value["confidence"], 0.5);
        assert!(value.get("solution_details").is_none());

        let back: ChatReply = serde_json::from_value(value).unwrap();
        assert_eq!(back, reply);
    }
}
