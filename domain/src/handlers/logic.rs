//! Logic handler. Describes a process; never solves the puzzle.

use super::traits::ProblemHandler;
use crate::classifier::HandlerCategory;
use crate::core::query::ProblemQuery;
use crate::solution::{Solution, SolutionType};

const PUZZLE_PROCESSES: &[(&str, &str)] = &[
    ("what comes next", "Analyzing the pattern..."),
    ("logic puzzle", "Applying logical reasoning..."),
    ("riddle", "Thinking creatively to solve..."),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LogicHandler;

impl LogicHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ProblemHandler for LogicHandler {
    fn category(&self) -> HandlerCategory {
        HandlerCategory::Logic
    }

    fn solve(&self, query: &ProblemQuery) -> Solution {
        let lower = query.lowercase();
        match PUZZLE_PROCESSES.iter().find(|(key, _)| lower.contains(*key)) {
            Some((_, process)) => Solution::new("Logical solution", *process, SolutionType::Logic),
            None => Solution::new(
                "Analytical solution",
                "Using logical reasoning and pattern recognition",
                SolutionType::Logic,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(text: &str) -> Solution {
        LogicHandler::new().solve(&ProblemQuery::new(text))
    }

    #[test]
    fn test_known_puzzles() {
        assert_eq!(solve("2, 4, 8, what comes next?").explanation, "Analyzing the pattern...");
        assert_eq!(solve("A Logic Puzzle").explanation, "Applying logical reasoning...");
        assert_eq!(solve("tell me a riddle").explanation, "Thinking creatively to solve...");
        assert_eq!(solve("riddle").answer.as_text(), Some("Logical solution"));
    }

    #[test]
    fn test_placeholder() {
        let s = solve("hello");
        assert_eq!(s.answer.as_text(), Some("Analytical solution"));
        assert_eq!(s.explanation, "Using logical reasoning and pattern recognition");
        assert_eq!(s.kind, SolutionType::Logic);
    }
}
