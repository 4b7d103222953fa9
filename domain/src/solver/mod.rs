//! Problem solver: classifier plus the six handlers
//!
//! [`ProblemSolver::solve`] is the whole core contract: text in, one
//! [`Solution`] out, never an error.

use crate::classifier::{CategoryClassifier, Classification, HandlerCategory};
use crate::core::query::ProblemQuery;
use crate::handlers::{
    ConversionHandler, LogicHandler, MathHandler, PhysicsHandler, ProblemHandler,
    ProgrammingHandler, TimeDateHandler,
};
use crate::solution::Solution;

/// Result of routing and solving a query
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub classification: Classification,
    pub solution: Solution,
}

/// Stateless dispatcher from category to handler
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemSolver {
    classifier: CategoryClassifier,
    math: MathHandler,
    physics: PhysicsHandler,
    programming: ProgrammingHandler,
    time_date: TimeDateHandler,
    conversion: ConversionHandler,
    logic: LogicHandler,
}

impl ProblemSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler serving a category
    pub fn handler(&self, category: HandlerCategory) -> &dyn ProblemHandler {
        match category {
            HandlerCategory::Math => &self.math,
            HandlerCategory::Physics => &self.physics,
            HandlerCategory::Programming => &self.programming,
            HandlerCategory::TimeDate => &self.time_date,
            HandlerCategory::Conversion => &self.conversion,
            HandlerCategory::Logic => &self.logic,
        }
    }

    /// Classify the query and run the chosen handler
    pub fn route(&self, query: &ProblemQuery) -> SolveOutcome {
        let classification = self.classifier.explain(query.content());
        let solution = self.handler(classification.category).solve(query);
        SolveOutcome {
            classification,
            solution,
        }
    }

    pub fn solve(&self, query: &ProblemQuery) -> Solution {
        self.route(query).solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::{Answer, SolutionType};

    fn solve(text: &str) -> Solution {
        ProblemSolver::new().solve(&ProblemQuery::new(text))
    }

    #[test]
    fn test_handlers_match_their_category() {
        let solver = ProblemSolver::new();
        for category in HandlerCategory::all() {
            assert_eq!(solver.handler(category).category(), category);
        }
    }

    #[test]
    fn test_end_to_end_arithmetic() {
        assert_eq!(solve("what is 2+3").answer, Answer::Integer(5));
        assert_eq!(solve("calculate 4*6").answer, Answer::Integer(24));
    }

    #[test]
    fn test_what_is_current_time_goes_to_math() {
        let outcome = ProblemSolver::new().route(&ProblemQuery::new("what is the current time"));
        assert_eq!(outcome.classification.category, HandlerCategory::Math);
        assert_eq!(outcome.solution.answer.as_text(), Some("Complex mathematical problem"));
    }

    #[test]
    fn test_current_time_without_what_is() {
        let s = solve("tell me the current time");
        assert_eq!(s.kind, SolutionType::Time);
    }

    #[test]
    fn test_conversion_route() {
        assert_eq!(solve("celsius to fahrenheit 100").answer.as_text(), Some("212.0°F"));
    }

    #[test]
    fn test_logic_fallback() {
        let s = solve("riddle me this");
        assert_eq!(s.kind, SolutionType::Logic);
        assert_eq!(s.answer.as_text(), Some("Logical solution"));
    }

    #[test]
    fn test_physics_route() {
        let s = solve("explain energy");
        assert_eq!(s.formula.as_deref(), Some("E = mc²"));
    }
}
