//! Console output formatter for chat replies and solutions

use colored::Colorize;
use solver_domain::{ChatReply, OutputFormat, Solution};

/// Local timestamp format used in JSON envelopes
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Formats replies and solutions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a chat reply in the requested format
    pub fn reply(format: OutputFormat, message: &str, reply: &ChatReply) -> String {
        match format {
            OutputFormat::Reply => reply.response.clone(),
            OutputFormat::Full => Self::format_reply_full(reply),
            OutputFormat::Json => Self::format_reply_json(message, reply, &now()),
        }
    }

    /// Format a solver result in the requested format
    pub fn solution(format: OutputFormat, problem: &str, solution: &Solution) -> String {
        match format {
            OutputFormat::Reply => format!("{}\n{}", solution.answer, solution.explanation),
            OutputFormat::Full => Self::format_solution_full(solution),
            OutputFormat::Json => Self::format_solution_json(problem, solution, &now()),
        }
    }

    pub fn format_reply_full(reply: &ChatReply) -> String {
        let mut output = String::new();

        output.push_str(&reply.response);
        output.push_str("\n\n");
        output.push_str(&Self::field("Type", &reply.kind.to_string()));
        output.push_str(&Self::field(
            "Sentiment",
            &format!("{} ({:.2})", reply.sentiment, reply.confidence),
        ));

        if let Some(solution) = &reply.solution_details {
            output.push_str(&format!("\n{}\n", "Solution".cyan().bold()));
            output.push_str(&Self::indent(&Self::format_solution_full(solution), "  "));
            output.push('\n');
        }

        output
    }

    pub fn format_solution_full(solution: &Solution) -> String {
        let mut output = String::new();

        output.push_str(&Self::field("Answer", &solution.answer.to_string()));
        output.push_str(&Self::field("Explanation", &solution.explanation));
        output.push_str(&Self::field("Type", solution.kind.as_str()));
        if let Some(formula) = &solution.formula {
            output.push_str(&Self::field("Formula", formula));
        }
        if let Some(language) = &solution.language {
            output.push_str(&Self::field("Language", language));
        }
        if let Some(details) = &solution.details {
            output.push_str(&format!("{}\n{}\n", "Details:".cyan().bold(), details));
        }

        output.trim_end().to_string()
    }

    /// JSON envelope for a chat reply
    pub fn format_reply_json(message: &str, reply: &ChatReply, timestamp: &str) -> String {
        let details = reply
            .solution_details
            .as_ref()
            .and_then(|s| serde_json::to_value(s).ok())
            .unwrap_or_else(|| serde_json::json!({}));
        let envelope = serde_json::json!({
            "user_message": message,
            "bot_response": &reply.response,
            "response_type": reply.kind.to_string(),
            "sentiment": &reply.sentiment,
            "confidence": reply.confidence,
            "timestamp": timestamp,
            "solution_details": details,
        });
        serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
    }

    /// JSON envelope for a solver result
    pub fn format_solution_json(problem: &str, solution: &Solution, timestamp: &str) -> String {
        let envelope = serde_json::json!({
            "problem": problem,
            "solution": solution,
            "timestamp": timestamp,
        });
        serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
    }

    fn field(label: &str, value: &str) -> String {
        format!("{} {}\n", format!("{}:", label).cyan().bold(), value)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_domain::{ReplyKind, Sentiment, SolutionType};

    fn arithmetic() -> Solution {
        Solution::new(5, "Addition: 2 + 3 = 5", SolutionType::Arithmetic)
    }

    #[test]
    fn test_reply_format_is_response_only() {
        let reply = ChatReply::new("Hello!", ReplyKind::RuleBased, &Sentiment::neutral());
        assert_eq!(ConsoleFormatter::reply(OutputFormat::Reply, "hi", &reply), "Hello!");
    }

    #[test]
    fn test_reply_json_envelope() {
        let reply = ChatReply::from_solution(arithmetic(), &Sentiment::new("POSITIVE", 0.9));
        let json = ConsoleFormatter::format_reply_json("what is 2 + 3", &reply, "2024-03-05 14:07:09");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["user_message"], "what is 2 + 3");
        assert_eq!(value["bot_response"], "🤔 5\n💡 Addition: 2 + 3 = 5");
        assert_eq!(value["response_type"], "problem_solution_arithmetic");
        assert_eq!(value["sentiment"], "POSITIVE");
        assert_eq!(value["confidence"], 0.9);
        assert_eq!(value["timestamp"], "2024-03-05 14:07:09");
        assert_eq!(value["solution_details"]["answer"], 5);
        assert_eq!(value["solution_details"]["type"], "arithmetic");
    }

    #[test]
    fn test_reply_json_without_solution_has_empty_details() {
        let reply = ChatReply::new("Hey!", ReplyKind::Fallback, &Sentiment::neutral());
        let json = ConsoleFormatter::format_reply_json("yo", &reply, "2024-03-05 14:07:09");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["solution_details"], serde_json::json!({}));
        assert_eq!(value["response_type"], "fallback");
    }

    #[test]
    fn test_solution_json_envelope() {
        let solution = arithmetic().with_formula("a + b");
        let json = ConsoleFormatter::format_solution_json("2 + 3", &solution, "2024-03-05 14:07:09");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["problem"], "2 + 3");
        assert_eq!(value["solution"]["formula"], "a + b");
        assert!(value["solution"].get("language").is_none());
    }

    #[test]
    fn test_full_solution_lists_optional_fields() {
        colored::control::set_override(false);
        let solution = Solution::new("Python solution for fibonacci", "def fib(n): ...", SolutionType::Programming)
            .with_language("Python");
        let text = ConsoleFormatter::format_solution_full(&solution);
        assert!(text.contains("Answer: Python solution for fibonacci"));
        assert!(text.contains("Language: Python"));
        assert!(!text.contains("Formula:"));
    }

    #[test]
    fn test_reply_plain_solution() {
        let text = ConsoleFormatter::solution(OutputFormat::Reply, "2 + 3", &arithmetic());
        assert_eq!(text, "5\nAddition: 2 + 3 = 5");
    }
}
